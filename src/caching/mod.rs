//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시 지원과 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("requirement:uuid:abc", &requirement, 600).await?;
//!
//! let cached: Option<Requirement> = cache.get("requirement:uuid:abc").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
