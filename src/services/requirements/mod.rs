//! 요구사항 관리 서비스 모듈
//!
//! 요구사항의 생성, 조회, 수정, 삭제, 목록, 전체 삭제 비즈니스 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::requirements::RequirementsService;
//! use crate::repositories::requirements::InMemoryRequirementsRepository;
//!
//! let service = RequirementsService::new(Arc::new(InMemoryRequirementsRepository::new()));
//! let uuid = service.create_requirement(&dto).await?;
//! ```

pub mod requirements_service;

pub use requirements_service::RequirementsService;
