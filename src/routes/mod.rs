//! # Routes
//!
//! 모든 HTTP 라우트와 요청 본문 설정을 한곳에서 구성합니다.
//!
//! ```text
//! GET  /health
//! POST /api/v1/users
//! GET  /api/v1/users/my-info   (AuthMiddleware: USER | ADMIN)
//! ```
//!
//! `UserService`와 `TokenService`는 `configure_all_routes` 호출 전에
//! `App::app_data`로 등록되어 있어야 합니다.

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(
                web::scope("/my-info")
                    .wrap(AuthMiddleware::required_with_roles(vec!["USER", "ADMIN"]))
                    .service(handlers::users::get_my_info),
            ),
    );
}

/// 읽을 수 없는 JSON 본문은 분류되지 않은 에러(9999)로 응답합니다.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("요청 본문 파싱 실패 {}: {}", req.path(), err);
    AppError::uncategorized(format!("Invalid JSON payload: {}", err)).into()
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "identity_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
