//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 trait 객체와 매퍼 값을 생성자로 주입받습니다.
//! 요청 간 공유 상태가 없으므로 `web::Data`로 모든 워커가 하나의 인스턴스를 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::requirements::RequirementsService;
//!
//! let service = RequirementsService::new(repository);
//! let all = service.get_all_requirements().await?;
//! ```

pub mod requirements;
