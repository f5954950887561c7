//! 요구사항 관련 DTO 모듈
//!
//! - [`RequirementsDto`] - 제목/설명 전송 객체 (요청 본문 검증 포함)
//! - [`ListRequirementsDto`] - 전체 목록 응답
//! - [`ResponseDto`], [`CreateRequirementResponse`] - 처리 결과 응답
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "title": "Login must lock after 5 failures",
//!   "description": "Account is locked for 15 minutes"
//! }
//! ```

pub mod requirements_dto;
pub mod list_requirements_dto;
pub mod response_dto;

pub use requirements_dto::RequirementsDto;
pub use list_requirements_dto::ListRequirementsDto;
pub use response_dto::{CreateRequirementResponse, ResponseDto};
