//! # Requirements HTTP Handlers
//!
//! 요구사항 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 핸들러는 `web::Data<RequirementsService>`로 서비스를 주입받습니다.
//!
//! ## RESTful API
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/requirements` | 요구사항 생성 | 201 Created |
//! | `GET` | `/api/v1/requirements` | 전체 목록 | 200 OK |
//! | `GET` | `/api/v1/requirements/{uuid}` | 단건 조회 | 200 OK |
//! | `PUT` | `/api/v1/requirements/{uuid}` | 제목/설명 수정 | 200 OK |
//! | `DELETE` | `/api/v1/requirements/all` | 전체 삭제 (키 필요) | 200 OK / 417 |
//! | `DELETE` | `/api/v1/requirements/{uuid}` | 단건 삭제 | 200 OK |
//!
//! `/all`은 `/{uuid}`보다 먼저 등록되어야 합니다.

use actix_web::{web, HttpRequest, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::requirements::{CreateRequirementResponse, RequirementsDto, ResponseDto};
use crate::services::requirements::RequirementsService;

/// 전체 삭제 키를 전달하는 요청 헤더
pub const DELETE_ALL_KEY_HEADER: &str = "X-Delete-All-Key";

fn validate_payload(payload: &RequirementsDto) -> Result<(), AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

/// 요구사항 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "title": "Login", "description": "User can log in" }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "uuid": "0b6f3c9e-...",
///   "status_code": "201",
///   "message": "Requirement created successfully"
/// }
/// ```
///
/// ## 제목 중복 (409 Conflict)
/// ```json
/// { "error": "Requirement already exists: Login" }
/// ```
#[post("")]
pub async fn create_requirement(
    service: web::Data<RequirementsService>,
    payload: web::Json<RequirementsDto>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&payload)?;

    let uuid = service.create_requirement(&payload).await?;

    Ok(HttpResponse::Created().json(CreateRequirementResponse::created(uuid)))
}

/// 전체 요구사항 목록 핸들러
#[get("")]
pub async fn get_all_requirements(
    service: web::Data<RequirementsService>,
) -> Result<HttpResponse, AppError> {
    let requirements = service.get_all_requirements().await?;

    Ok(HttpResponse::Ok().json(requirements))
}

/// 요구사항 단건 조회 핸들러
///
/// uuid가 없으면 404와 함께
/// `Requirement not found with the given input data uuid : '{uuid}'` 메시지를 반환합니다.
#[get("/{uuid}")]
pub async fn fetch_requirement(
    service: web::Data<RequirementsService>,
    uuid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let requirement = service.fetch_requirement(&uuid).await?;

    Ok(HttpResponse::Ok().json(requirement))
}

/// 요구사항 수정 핸들러
///
/// 제목 중복 검사는 수행하지 않습니다.
#[put("/{uuid}")]
pub async fn update_requirement(
    service: web::Data<RequirementsService>,
    uuid: web::Path<String>,
    payload: web::Json<RequirementsDto>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&payload)?;

    service.update_requirement(&uuid, &payload).await?;

    Ok(HttpResponse::Ok().json(ResponseDto::ok()))
}

/// 전체 삭제 핸들러
///
/// 키는 쿼리 문자열 대신 `X-Delete-All-Key` 헤더로 받습니다.
/// 헤더가 없으면 빈 키로 취급되어 거절됩니다.
///
/// # 응답
///
/// - 200 OK: `{"status_code": "200", "status_msg": "Request processed successfully"}`
/// - 417 Expectation Failed: 키 불일치
///
/// ```bash
/// curl -X DELETE http://localhost:8080/api/v1/requirements/all \
///   -H "X-Delete-All-Key: <key>"
/// ```
#[delete("/all")]
pub async fn delete_all_requirements(
    service: web::Data<RequirementsService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let key = req.headers()
        .get(DELETE_ALL_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if service.delete_all_requirements(key).await? {
        Ok(HttpResponse::Ok().json(ResponseDto::ok()))
    } else {
        Ok(HttpResponse::ExpectationFailed().json(ResponseDto::delete_failed()))
    }
}

/// 요구사항 단건 삭제 핸들러
#[delete("/{uuid}")]
pub async fn delete_requirement(
    service: web::Data<RequirementsService>,
    uuid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_requirement(&uuid).await?;

    Ok(HttpResponse::Ok().json(ResponseDto::ok()))
}
