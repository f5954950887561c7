//! # Domain Module
//!
//! 요구사항 도메인의 엔티티, 전송 객체, 매퍼를 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   # Requirement (저장소 레코드)
//! ├── dto/        # RequirementsDto, ListRequirementsDto, 응답 DTO
//! └── mappers/    # RequirementMapper (주입 가능한 변환 함수)
//! ```

pub mod entities;
pub mod dto;
pub mod mappers;

pub use entities::Requirement;
pub use dto::{CreateRequirementResponse, ListRequirementsDto, RequirementsDto, ResponseDto};
pub use mappers::RequirementMapper;
