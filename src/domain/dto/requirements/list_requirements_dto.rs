use serde::{Deserialize, Serialize};
use super::requirements_dto::RequirementsDto;

/// 요구사항 목록 응답 DTO
///
/// 저장소가 돌려준 순서를 유지하며, 비어 있을 수는 있어도 없을 수는 없습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRequirementsDto {
    pub requirements: Vec<RequirementsDto>,
}

impl ListRequirementsDto {
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl From<Vec<RequirementsDto>> for ListRequirementsDto {
    fn from(requirements: Vec<RequirementsDto>) -> Self {
        Self { requirements }
    }
}
