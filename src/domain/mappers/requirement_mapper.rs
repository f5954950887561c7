//! 요구사항 엔티티 ↔ DTO 매퍼
//!
//! 매핑 함수는 서비스에 값으로 주입됩니다. 테스트에서는 원하는 함수로
//! 교체한 매퍼를 넘기면 되며, 전역 상태를 건드리지 않습니다.

use crate::domain::dto::requirements::RequirementsDto;
use crate::domain::entities::requirements::Requirement;

/// DTO의 필드를 대상 엔티티에 적용하고 그 엔티티를 돌려주는 함수
pub type ToEntityFn = fn(&RequirementsDto, Requirement) -> Requirement;

/// 엔티티의 필드를 대상 DTO에 적용하고 그 DTO를 돌려주는 함수
pub type ToDtoFn = fn(&Requirement, RequirementsDto) -> RequirementsDto;

/// 주입 가능한 순수 함수 매퍼
#[derive(Clone, Copy)]
pub struct RequirementMapper {
    pub to_entity: ToEntityFn,
    pub to_dto: ToDtoFn,
}

impl RequirementMapper {
    pub fn new(to_entity: ToEntityFn, to_dto: ToDtoFn) -> Self {
        Self { to_entity, to_dto }
    }

    pub fn map_to_requirement(&self, dto: &RequirementsDto, target: Requirement) -> Requirement {
        (self.to_entity)(dto, target)
    }

    pub fn map_to_requirement_dto(&self, requirement: &Requirement, target: RequirementsDto) -> RequirementsDto {
        (self.to_dto)(requirement, target)
    }
}

impl Default for RequirementMapper {
    fn default() -> Self {
        Self::new(map_to_requirement, map_to_requirement_dto)
    }
}

impl std::fmt::Debug for RequirementMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequirementMapper").finish_non_exhaustive()
    }
}

/// 제목과 설명을 엔티티에 복사합니다. 식별자와 생성 시간은 건드리지 않습니다.
pub fn map_to_requirement(dto: &RequirementsDto, mut target: Requirement) -> Requirement {
    target.title = dto.title.clone();
    target.description = dto.description.clone();
    target
}

pub fn map_to_requirement_dto(requirement: &Requirement, mut target: RequirementsDto) -> RequirementsDto {
    target.title = requirement.title.clone();
    target.description = requirement.description.clone();
    target
}
