//! 요구사항 데이터 액세스 계층
//!
//! 서비스는 [`RequirementsRepository`] trait에만 의존합니다.
//!
//! - [`MongoRequirementsRepository`](requirements_repo::MongoRequirementsRepository) -
//!   MongoDB 영구 저장 + Redis uuid 조회 캐시
//! - [`InMemoryRequirementsRepository`](memory_repo::InMemoryRequirementsRepository) -
//!   프로세스 메모리 저장소 (로컬 실행, 통합 테스트)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::requirements::{InMemoryRequirementsRepository, RequirementsRepository};
//!
//! let repo: Arc<dyn RequirementsRepository> = Arc::new(InMemoryRequirementsRepository::new());
//! let found = repo.find_by_uuid("test-uuid").await?;
//! ```

pub mod requirements_repo;
pub mod memory_repo;

use async_trait::async_trait;
use crate::core::errors::AppError;
use crate::domain::entities::requirements::Requirement;

pub use memory_repo::InMemoryRequirementsRepository;
pub use requirements_repo::MongoRequirementsRepository;

/// 요구사항 저장소 계약
///
/// `save` 계열은 `req_id`가 없는 엔티티에 새 식별자를 할당하고,
/// 있는 엔티티는 같은 `req_id`의 레코드를 교체합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequirementsRepository: Send + Sync {
    /// 제목으로 조회
    async fn find_by_title(&self, title: &str) -> Result<Option<Requirement>, AppError>;

    /// uuid로 조회
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Requirement>, AppError>;

    /// 저장 (필요 시 `req_id` 할당)
    async fn save(&self, requirement: Requirement) -> Result<Requirement, AppError>;

    /// 저장 후 즉시 flush
    async fn save_and_flush(&self, requirement: Requirement) -> Result<Requirement, AppError>;

    /// 내부 숫자 식별자로 삭제
    async fn delete_by_req_id(&self, req_id: i64) -> Result<(), AppError>;

    /// 전체 삭제
    async fn delete_all(&self) -> Result<(), AppError>;

    /// 보류 중인 쓰기를 저장소에 반영
    async fn flush(&self) -> Result<(), AppError>;

    /// 전체 조회 (`req_id` 오름차순)
    async fn find_all(&self) -> Result<Vec<Requirement>, AppError>;
}
