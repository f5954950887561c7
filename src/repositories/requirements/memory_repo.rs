//! 프로세스 메모리 기반 요구사항 리포지토리
//!
//! `STORAGE=memory`로 실행하거나 통합 테스트에서 사용합니다.
//! 재시작하면 데이터가 사라집니다.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use async_trait::async_trait;
use crate::core::errors::AppError;
use crate::domain::entities::requirements::Requirement;
use super::RequirementsRepository;

/// `req_id` 순으로 정렬된 메모리 저장소
#[derive(Default)]
pub struct InMemoryRequirementsRepository {
    store: RwLock<BTreeMap<i64, Requirement>>,
    sequence: AtomicI64,
}

impl InMemoryRequirementsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 요구사항 수
    pub fn count(&self) -> Result<usize, AppError> {
        let store = self.store.read().map_err(|_| Self::poisoned())?;
        Ok(store.len())
    }

    fn poisoned() -> AppError {
        AppError::InternalError("요구사항 저장소 잠금이 손상되었습니다".to_string())
    }
}

#[async_trait]
impl RequirementsRepository for InMemoryRequirementsRepository {
    async fn find_by_title(&self, title: &str) -> Result<Option<Requirement>, AppError> {
        let store = self.store.read().map_err(|_| Self::poisoned())?;
        Ok(store.values().find(|r| r.title == title).cloned())
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Requirement>, AppError> {
        let store = self.store.read().map_err(|_| Self::poisoned())?;
        Ok(store.values().find(|r| r.uuid == uuid).cloned())
    }

    async fn save(&self, mut requirement: Requirement) -> Result<Requirement, AppError> {
        let req_id = match requirement.req_id {
            Some(id) => id,
            None => {
                let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
                requirement.req_id = Some(id);
                id
            }
        };

        let mut store = self.store.write().map_err(|_| Self::poisoned())?;
        store.insert(req_id, requirement.clone());

        Ok(requirement)
    }

    async fn save_and_flush(&self, requirement: Requirement) -> Result<Requirement, AppError> {
        let saved = self.save(requirement).await?;
        self.flush().await?;
        Ok(saved)
    }

    async fn delete_by_req_id(&self, req_id: i64) -> Result<(), AppError> {
        let mut store = self.store.write().map_err(|_| Self::poisoned())?;
        store.remove(&req_id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let mut store = self.store.write().map_err(|_| Self::poisoned())?;
        store.clear();
        Ok(())
    }

    async fn flush(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Requirement>, AppError> {
        let store = self.store.read().map_err(|_| Self::poisoned())?;
        Ok(store.values().cloned().collect())
    }
}
