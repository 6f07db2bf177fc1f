//! # Middlewares
//!
//! 라우트 스코프에 `wrap`으로 적용하는 요청 파이프라인 미들웨어입니다.

mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
