//! 요구사항 전송 DTO
//!
//! 서비스 경계에서 요구사항의 제목과 설명을 전달합니다. 식별자는 포함하지 않습니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 요구사항 생성/수정 요청 및 조회 응답에 쓰이는 DTO
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct RequirementsDto {
    /// 제목 (1-255자, 공백만으로 구성 불가)
    #[validate(length(
        min = 1,
        max = 255,
        message = "제목은 1-255자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    /// 설명 (최대 4000자)
    #[serde(default)]
    #[validate(length(max = 4000, message = "설명은 4000자를 넘을 수 없습니다"))]
    pub description: String,
}

impl RequirementsDto {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("제목은 공백일 수 없습니다".into()));
    }
    Ok(())
}
