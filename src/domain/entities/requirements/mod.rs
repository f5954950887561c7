//! Requirements Entity Module
//!
//! 요구사항 도메인의 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::requirements::Requirement;
//!
//! let requirement = Requirement::new(uuid::Uuid::new_v4().to_string());
//! ```

pub mod requirement;

pub use requirement::Requirement;
