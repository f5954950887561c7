//! # 요구사항 리포지토리 구현 (MongoDB)
//!
//! 요구사항 엔티티의 데이터 액세스 계층을 담당합니다.
//! MongoDB를 주 저장소로 사용하고, uuid 조회에 Redis 캐싱을 적용합니다.
//!
//! ## 특징
//!
//! - **숫자 식별자 시퀀스**: `counters` 컬렉션의 `$inc`로 `req_id` 할당
//! - **uuid 조회 캐싱**: `requirement:uuid:{uuid}` 키, TTL 10분
//! - **쓰기 후 캐시 무효화**: 저장/삭제 시 관련 키 제거

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::{
    bson::{doc, Bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReplaceOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult, ErrorContext},
    db::Database,
    domain::entities::requirements::Requirement,
};
use super::RequirementsRepository;

const COLLECTION_NAME: &str = "requirements";
const COUNTERS_COLLECTION: &str = "counters";
const SEQUENCE_NAME: &str = "requirements_req_id";
const CACHE_PREFIX: &str = "requirement:uuid:";
const CACHE_TTL_SECONDS: u64 = 600;

/// MongoDB 기반 요구사항 리포지토리
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**: `requirement:uuid:{uuid}`
/// - 캐시 읽기/쓰기 실패는 경고 로그만 남기고 조회 결과에 영향을 주지 않습니다.
/// - MongoDB 조회와 캐시 기록 사이에 삭제가 끼어들면 삭제된 문서가
///   TTL 동안 캐시에 남을 수 있습니다.
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `requirements`
/// - **인덱스**: uuid(unique), req_id(unique), title
pub struct MongoRequirementsRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl MongoRequirementsRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<Requirement> {
        self.db.collection::<Requirement>(COLLECTION_NAME)
    }

    fn cache_key(uuid: &str) -> String {
        format!("{}{}", CACHE_PREFIX, uuid)
    }

    fn cache_pattern() -> String {
        format!("{}*", CACHE_PREFIX)
    }

    async fn invalidate_cache(&self, uuid: &str) {
        if let Err(e) = self.redis.del(&Self::cache_key(uuid)).await.cache_context("요구사항 캐시 무효화 실패") {
            warn!("{} (uuid={})", e, uuid);
        }
    }

    async fn cached(&self, uuid: &str) -> Option<Requirement> {
        match self.redis.get::<Requirement>(&Self::cache_key(uuid)).await.cache_context("요구사항 캐시 조회 실패") {
            Ok(cached) => cached,
            Err(e) => {
                warn!("{} (uuid={})", e, uuid);
                None
            }
        }
    }

    async fn store_in_cache(&self, requirement: &Requirement) {
        let result = self.redis
            .set_with_expiry(&Self::cache_key(&requirement.uuid), requirement, CACHE_TTL_SECONDS)
            .await
            .cache_context("요구사항 캐시 저장 실패");

        if let Err(e) = result {
            warn!("{} (uuid={})", e, requirement.uuid);
        }
    }

    /// `counters` 컬렉션에서 다음 `req_id`를 발급합니다.
    async fn next_req_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.db.collection::<Document>(COUNTERS_COLLECTION)
            .find_one_and_update(
                doc! { "_id": SEQUENCE_NAME },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .db_context("req_id 시퀀스 발급 실패")?;

        Self::sequence_value(counter)
    }

    /// 시퀀스 문서의 `seq` 값을 읽습니다. 수동으로 넣은 int32 값도 허용합니다.
    fn sequence_value(counter: Option<Document>) -> AppResult<i64> {
        let counter = counter
            .ok_or_else(|| AppError::DatabaseError("req_id 시퀀스를 발급하지 못했습니다".to_string()))?;

        match counter.get("seq") {
            Some(Bson::Int64(seq)) => Ok(*seq),
            Some(Bson::Int32(seq)) => Ok(i64::from(*seq)),
            other => Err(AppError::DatabaseError(format!("req_id 시퀀스 형식 오류: {:?}", other))),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **uuid 유니크 인덱스** - 외부 식별자 조회
    /// 2. **req_id 유니크 인덱스** - 저장 교체와 삭제
    /// 3. **title 인덱스** - 생성 시 중복 검사 조회
    ///
    /// 제목은 수정 시 중복을 허용하므로 유니크 인덱스를 두지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let uuid_index = IndexModel::builder()
            .keys(doc! { "uuid": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("uuid_unique".to_string())
                .build())
            .build();

        let req_id_index = IndexModel::builder()
            .keys(doc! { "req_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("req_id_unique".to_string())
                .build())
            .build();

        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(IndexOptions::builder()
                .name("title_lookup".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([uuid_index, req_id_index, title_index])
            .await
            .db_context("요구사항 인덱스 생성 실패")?;

        Ok(())
    }
}

#[async_trait]
impl RequirementsRepository for MongoRequirementsRepository {
    async fn find_by_title(&self, title: &str) -> Result<Option<Requirement>, AppError> {
        self.collection()
            .find_one(doc! { "title": title })
            .await
            .db_context("요구사항 제목 조회 실패")
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Requirement>, AppError> {
        if let Some(cached) = self.cached(uuid).await {
            debug!("요구사항 캐시 적중: {}", uuid);
            return Ok(Some(cached));
        }

        let requirement = self.collection()
            .find_one(doc! { "uuid": uuid })
            .await
            .db_context("요구사항 uuid 조회 실패")?;

        if let Some(ref requirement) = requirement {
            self.store_in_cache(requirement).await;
        }

        Ok(requirement)
    }

    async fn save(&self, mut requirement: Requirement) -> Result<Requirement, AppError> {
        let req_id = match requirement.req_id {
            Some(id) => id,
            None => {
                let id = self.next_req_id().await?;
                requirement.req_id = Some(id);
                id
            }
        };

        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection()
            .replace_one(doc! { "req_id": req_id }, &requirement)
            .with_options(options)
            .await
            .db_context("요구사항 저장 실패")?;

        self.invalidate_cache(&requirement.uuid).await;

        Ok(requirement)
    }

    async fn save_and_flush(&self, requirement: Requirement) -> Result<Requirement, AppError> {
        let saved = self.save(requirement).await?;
        self.flush().await?;
        Ok(saved)
    }

    async fn delete_by_req_id(&self, req_id: i64) -> Result<(), AppError> {
        let deleted = self.collection()
            .find_one_and_delete(doc! { "req_id": req_id })
            .await
            .db_context("요구사항 삭제 실패")?;

        if let Some(requirement) = deleted {
            self.invalidate_cache(&requirement.uuid).await;
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let result = self.collection()
            .delete_many(doc! {})
            .await
            .db_context("요구사항 전체 삭제 실패")?;

        debug!("요구사항 {}건 삭제", result.deleted_count);

        match self.redis.keys(&Self::cache_pattern()).await.cache_context("요구사항 캐시 키 조회 실패") {
            Ok(keys) => {
                if let Err(e) = self.redis.del_multiple(&keys).await.cache_context("요구사항 캐시 전체 무효화 실패") {
                    warn!("{}", e);
                }
            }
            Err(e) => warn!("{}", e),
        }

        Ok(())
    }

    /// MongoDB 쓰기는 확인 응답 시점에 이미 반영되므로 추가 작업이 없습니다.
    async fn flush(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Requirement>, AppError> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "req_id": 1 })
            .await
            .db_context("요구사항 목록 조회 실패")?;

        cursor
            .try_collect()
            .await
            .db_context("요구사항 목록 읽기 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_format() {
        assert_eq!(
            MongoRequirementsRepository::cache_key("test-uuid"),
            "requirement:uuid:test-uuid"
        );
    }

    #[test]
    fn test_cache_pattern_covers_every_uuid_key() {
        let pattern = MongoRequirementsRepository::cache_pattern();
        let key = MongoRequirementsRepository::cache_key("test-uuid");

        assert_eq!(pattern, "requirement:uuid:*");
        assert!(key.starts_with(pattern.trim_end_matches('*')));
    }

    #[test]
    fn test_sequence_value_reads_int64() {
        let counter = doc! { "_id": SEQUENCE_NAME, "seq": 42_i64 };

        assert_eq!(MongoRequirementsRepository::sequence_value(Some(counter)).unwrap(), 42);
    }

    #[test]
    fn test_sequence_value_accepts_int32() {
        let counter = doc! { "_id": SEQUENCE_NAME, "seq": 7_i32 };

        assert_eq!(MongoRequirementsRepository::sequence_value(Some(counter)).unwrap(), 7);
    }

    #[test]
    fn test_sequence_value_rejects_missing_or_malformed_counter() {
        let missing = MongoRequirementsRepository::sequence_value(None);
        let malformed = MongoRequirementsRepository::sequence_value(Some(doc! { "seq": "one" }));
        let absent = MongoRequirementsRepository::sequence_value(Some(doc! { "_id": SEQUENCE_NAME }));

        assert!(matches!(missing, Err(AppError::DatabaseError(_))));
        assert!(matches!(malformed, Err(AppError::DatabaseError(_))));
        assert!(matches!(absent, Err(AppError::DatabaseError(_))));
    }
}
