use serde::{Deserialize, Serialize};

pub const STATUS_200: &str = "200";
pub const MESSAGE_200: &str = "Request processed successfully";
pub const STATUS_201: &str = "201";
pub const MESSAGE_201: &str = "Requirement created successfully";
pub const STATUS_417: &str = "417";
pub const MESSAGE_417_DELETE: &str = "Delete operation failed. Please try again or contact Dev team";

/// 처리 결과 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDto {
    pub status_code: String,
    pub status_msg: String,
}

impl ResponseDto {
    pub fn new(status_code: &str, status_msg: &str) -> Self {
        Self {
            status_code: status_code.to_string(),
            status_msg: status_msg.to_string(),
        }
    }

    pub fn ok() -> Self {
        Self::new(STATUS_200, MESSAGE_200)
    }

    pub fn delete_failed() -> Self {
        Self::new(STATUS_417, MESSAGE_417_DELETE)
    }
}

/// 요구사항 생성 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRequirementResponse {
    pub uuid: String,
    pub status_code: String,
    pub message: String,
}

impl CreateRequirementResponse {
    pub fn created(uuid: String) -> Self {
        Self {
            uuid,
            status_code: STATUS_201.to_string(),
            message: MESSAGE_201.to_string(),
        }
    }
}
