//! # Application Error Handling System
//!
//! 요구사항 서비스를 위한 통합 에러 처리 시스템입니다.
//! 서비스 계층에서 발생한 에러는 로컬 복구 없이 그대로 호출자에게 전파되며,
//! HTTP 계층에서는 `ResponseError` 구현을 통해 상태 코드가 결정됩니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 발생 조건 | HTTP |
//! |------|-----------|------|
//! | `RequirementAlreadyExists` | 생성 시 제목 중복 | 409 |
//! | `ResourceNotFound` | uuid 조회/수정/삭제 대상 없음 | 404 |
//! | `ValidationError` | 요청 본문 검증 실패 | 400 |
//! | `DatabaseError` / `RedisError` / `InternalError` | 저장소 및 시스템 오류 | 500 |
//!
//! 전체 삭제 키 불일치는 에러가 아니라 `Ok(false)`로 표현됩니다.
//! "거절"과 "오류"를 구분하기 위함입니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let requirement = self.repository
//!     .find_by_uuid(uuid)
//!     .await?
//!     .ok_or_else(|| AppError::not_found("Requirement", "uuid", uuid))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 동일한 제목의 요구사항이 이미 존재함 (409 Conflict)
    #[error("Requirement already exists: {0}")]
    RequirementAlreadyExists(String),

    /// 조회 대상 리소스 없음 (404 Not Found)
    #[error("{resource} not found with the given input data {field} : '{value}'")]
    ResourceNotFound {
        resource: String,
        field: String,
        value: String,
    },

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `ResourceNotFound` 생성 헬퍼
    pub fn not_found(resource: &str, field: &str, value: &str) -> Self {
        AppError::ResourceNotFound {
            resource: resource.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RequirementAlreadyExists(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러를 상태 코드와 `{"error": "..."}` JSON 본문으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 저장소 호출 결과에 컨텍스트 메시지를 붙여 해당 계층의 에러 변형으로 바꿉니다.
///
/// ```rust,ignore
/// let found = collection.find_one(filter).await.db_context("요구사항 조회 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// `DatabaseError`로 변환합니다.
    fn db_context(self, msg: &str) -> AppResult<T>;

    /// `RedisError`로 변환합니다.
    fn cache_context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn db_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::DatabaseError(format!("{}: {}", msg, e)))
    }

    fn cache_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::RedisError(format!("{}: {}", msg, e)))
    }
}
