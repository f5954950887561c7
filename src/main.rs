//! 요구사항 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 요구사항 서비스를 초기화합니다.
//! 저장소 백엔드(MongoDB + Redis 또는 메모리)를 선택해 리포지토리를 만들고,
//! 서비스를 `web::Data`로 모든 워커에 공유합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use requirements_service_backend::caching::redis::RedisClient;
use requirements_service_backend::config::{Environment, RateLimitConfig, ServerConfig, StorageBackend};
use requirements_service_backend::db::Database;
use requirements_service_backend::handlers::requirements::DELETE_ALL_KEY_HEADER;
use requirements_service_backend::repositories::requirements::{
    InMemoryRequirementsRepository, MongoRequirementsRepository, RequirementsRepository,
};
use requirements_service_backend::routes::configure_all_routes;
use requirements_service_backend::services::requirements::RequirementsService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 요구사항 서비스 시작중... (환경: {:?})", Environment::current());

    let repository = initialize_repository().await?;
    let service = web::Data::new(RequirementsService::new(repository));

    info!("✅ 요구사항 서비스가 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// 바인딩 주소는 `HOST`/`PORT` 환경 변수로 결정됩니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: web::Data<RequirementsService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/requirements", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=requirements_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `STORAGE` 설정에 따라 리포지토리를 생성합니다
///
/// MongoDB 백엔드는 연결 확인과 인덱스 생성까지 마친 뒤 반환합니다.
async fn initialize_repository() -> io::Result<Arc<dyn RequirementsRepository>> {
    match StorageBackend::current() {
        StorageBackend::Memory => {
            info!("🧠 메모리 저장소 사용 (재시작 시 데이터 소멸)");
            Ok(Arc::new(InMemoryRequirementsRepository::new()))
        }
        StorageBackend::Mongo => {
            let (database, redis_client) = initialize_data_stores().await?;
            let repository = MongoRequirementsRepository::new(database, redis_client);

            repository.create_indexes().await
                .map_err(|e| io::Error::other(format!("인덱스 생성 실패: {}", e)))?;

            info!("✅ 요구사항 컬렉션 인덱스 준비 완료");

            Ok(Arc::new(repository))
        }
    }
}

/// MongoDB와 Redis 연결을 초기화합니다
///
/// # Errors
///
/// * MongoDB 연결 실패
/// * Redis 연결 실패
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;

    info!("✅ MongoDB 연결 성공: {}", database.database_name());

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| io::Error::other(format!("Redis 연결 실패: {}", e)))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .allowed_header(DELETE_ALL_KEY_HEADER)
        .max_age(3600)
}
