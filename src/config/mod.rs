//! # Configuration Module
//!
//! 요구사항 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 환경 변수는 `main`에서 `PROFILE`에 맞는 `.env` 파일로부터 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Rate Limiting, 저장소 백엔드 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소 (mongo | memory)
//! export STORAGE="mongo"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="testplan_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;
