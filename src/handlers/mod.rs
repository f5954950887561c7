//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청 본문 검증과 상태 코드 결정만 담당하고, 비즈니스 규칙은 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   RequirementsService - 비즈니스 로직            ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   RequirementsRepository - 데이터 접근          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 `{"error": ...}` 본문을 만듭니다.
//!
//! ```rust,ignore
//! #[get("/{uuid}")]
//! pub async fn fetch_requirement(
//!     service: web::Data<RequirementsService>,
//!     uuid: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let requirement = service.fetch_requirement(&uuid).await?; // 404 자동 매핑
//!     Ok(HttpResponse::Ok().json(requirement))
//! }
//! ```

pub mod requirements;
