//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 엔티티와 DTO
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장소 형태의 레코드)
//! ├── dto/          ← 서비스 경계에서 주고받는 전송 객체
//! └── mappers/      ← 엔티티 ↔ DTO 변환 함수
//! ```
//!
//! 엔티티는 `uuid`, `req_id` 같은 식별자를 가지며, DTO는 외부에 필요한
//! 필드(제목, 설명)만 전달합니다.

pub mod requirements;

pub use requirements::*;
