//! # Core Module
//!
//! 요구사항 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 저장소 에러에 컨텍스트를 붙여 `DatabaseError` / `RedisError`로 변환

pub mod errors;

pub use errors::*;
