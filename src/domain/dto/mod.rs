//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: 엔티티의 식별자(`uuid`, `req_id`)는 DTO에 포함하지 않음
//! - **유효성 검증 내장**: `validator` crate를 통한 요청 본문 검증
//! - **serde 직렬화**: JSON 필드와 구조체 필드의 1:1 매핑
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── requirements/
//!     ├── requirements_dto.rs       # 제목/설명
//!     ├── list_requirements_dto.rs  # 목록 응답
//!     └── response_dto.rs           # 처리 결과 응답
//! ```

pub mod requirements;

pub use requirements::*;
