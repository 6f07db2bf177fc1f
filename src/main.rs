//! 아이덴티티 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 초기화합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use identity_service_backend::caching::redis::RedisClient;
use identity_service_backend::config::{
    JwtConfig, PasswordConfig, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use identity_service_backend::db::Database;
use identity_service_backend::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use identity_service_backend::routes::configure_all_routes;
use identity_service_backend::services::auth::TokenService;
use identity_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 아이덴티티 서비스 시작중...");

    let user_repo = initialize_user_repository().await?;

    let user_service = web::Data::new(UserService::new(user_repo, PasswordConfig::bcrypt_cost()));
    let token_service = web::Data::new(TokenService::new(&JwtConfig::secret()));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service, token_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .app_data(user_service.clone())
            .app_data(token_service.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 eprintln으로 남깁니다
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `STORAGE_BACKEND`에 따라 사용자 저장소를 생성합니다
///
/// MongoDB 백엔드는 MongoDB와 Redis 연결이 모두 성공해야 하며, 시작 시 유니크 인덱스를 보장합니다.
async fn initialize_user_repository() -> io::Result<Arc<dyn UserRepository>> {
    match StorageConfig::backend() {
        StorageBackend::Memory => {
            info!("🧠 인메모리 사용자 저장소 사용 (재시작 시 데이터 소멸)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::other(format!("MongoDB 연결 실패: {}", e))
            })?;

            let redis_client = RedisClient::new().await.map_err(|e| {
                error!("Redis 연결 실패: {}", e);
                io::Error::other(format!("Redis 연결 실패: {}", e))
            })?;

            let repo = MongoUserRepository::new(Arc::new(database), Arc::new(redis_client));
            repo.create_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {:?}", e.detail());
                io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(repo))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 프론트엔드와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
