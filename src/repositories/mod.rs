//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하고 Redis를 통한 조회 캐싱을 지원합니다.
//! 서비스에는 trait 객체(`Arc<dyn RequirementsRepository>`)로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::requirements::MongoRequirementsRepository;
//!
//! let repo = MongoRequirementsRepository::new(database, redis);
//! repo.create_indexes().await?;
//! ```

pub mod requirements;
