//! 요구사항 관리 서비스 백엔드
//!
//! 테스트 계획 도구의 요구사항(제목 + 설명)을 관리하는 Rust 기반 REST 서비스입니다.
//! 요구사항은 외부에 노출되는 uuid와 내부 숫자 식별자 `req_id`를 함께 가집니다.
//!
//! # Features
//!
//! - **요구사항 CRUD**: 생성, uuid 조회, 수정, 삭제, 전체 목록
//! - **제목 유일성**: 생성 시점 검사
//! - **전체 삭제**: 고정 키로 보호되는 관리용 작업
//! - **MongoDB**: 요구사항 영구 저장
//! - **Redis**: uuid 조회 캐싱
//! - **메모리 저장소**: `STORAGE=memory`로 외부 의존 없이 실행
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 + 매퍼
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use requirements_service_backend::domain::RequirementsDto;
//! use requirements_service_backend::repositories::requirements::InMemoryRequirementsRepository;
//! use requirements_service_backend::services::requirements::RequirementsService;
//!
//! let service = RequirementsService::new(Arc::new(InMemoryRequirementsRepository::new()));
//! let uuid = service.create_requirement(&RequirementsDto::new("Login", "User can log in")).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
