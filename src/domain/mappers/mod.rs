//! 엔티티 ↔ DTO 매퍼 모듈

pub mod requirement_mapper;

pub use requirement_mapper::RequirementMapper;
