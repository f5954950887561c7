//! API 라우트 설정 모듈
//!
//! 요구사항 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Features
//!
//! - 요구사항 CRUD API 엔드포인트
//! - 키 기반 전체 삭제 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! 핸들러는 `web::Data<RequirementsService>`를 요구하므로,
//! 앱에 서비스가 `app_data`로 등록되어 있어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(service))
//!     .configure(configure_all_routes);
//! ```

use crate::config::StorageBackend;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_requirement_routes(cfg);
}

/// 요구사항 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/requirements` - 요구사항 생성
/// - `GET /api/v1/requirements` - 전체 목록
/// - `GET /api/v1/requirements/{uuid}` - 단건 조회
/// - `PUT /api/v1/requirements/{uuid}` - 수정
/// - `DELETE /api/v1/requirements/all` - 전체 삭제 (`X-Delete-All-Key` 헤더)
/// - `DELETE /api/v1/requirements/{uuid}` - 단건 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/requirements \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Login","description":"User can log in"}'
///
/// curl http://localhost:8080/api/v1/requirements/{uuid}
/// ```
fn configure_requirement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/requirements")
            .service(handlers::requirements::create_requirement)
            .service(handlers::requirements::get_all_requirements)
            // "/all"이 "/{uuid}"에 먼저 매칭되지 않도록 순서 유지
            .service(handlers::requirements::delete_all_requirements)
            .service(handlers::requirements::fetch_requirement)
            .service(handlers::requirements::update_requirement)
            .service(handlers::requirements::delete_requirement)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// `features`의 저장소/캐시 값은 `STORAGE` 설정을 따르며,
/// 메모리 저장소에서는 `cache`가 `null`입니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "requirements_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "web::Data"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    let storage = StorageBackend::current();

    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "requirements_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": storage.database_label(),
            "cache": storage.cache_label(),
            "dependency_injection": "web::Data"
        }
    }))
}
