//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고 인증 주체를 요청 extensions에 저장합니다.
//!
//! ## 응답 규칙
//!
//! | 상황 | 코드 | HTTP |
//! |------|------|------|
//! | 헤더 없음, 형식 오류, 서명/만료 검증 실패 | 1006 | 401 |
//! | 토큰은 유효하나 요구 역할 없음 | 1007 | 403 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! web::scope("/my-info")
//!     .wrap(AuthMiddleware::required_with_roles(vec!["USER", "ADMIN"]))
//!     .service(get_my_info)
//! ```
//!
//! `TokenService`는 `App::app_data(web::Data<TokenService>)`로 등록되어 있어야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    required_role: RequiredRole,
}

impl AuthMiddleware {
    /// 유효한 토큰과 나열된 역할 중 하나 이상을 요구합니다.
    pub fn required_with_roles(roles: Vec<&str>) -> Self {
        Self {
            required_role: RequiredRole::any(&roles),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorCode;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;
    use actix_web::{get, test, web, App, HttpResponse};
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::Value;

    const SECRET: &str = "middleware-test-secret";

    #[get("/protected")]
    async fn protected(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.principal_key)
    }

    fn bearer(roles: &[&str]) -> String {
        let now = Utc::now();
        let claims = crate::domain::models::token::TokenClaims {
            sub: "0563016466".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        format!("Bearer {}", token)
    }

    async fn call(auth_header: Option<String>) -> (u16, Vec<u8>) {
        let middleware = AuthMiddleware::required_with_roles(vec!["USER", "ADMIN"]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TokenService::new(SECRET)))
                .service(web::scope("").wrap(middleware).service(protected)),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/protected");
        if let Some(value) = auth_header {
            req = req.insert_header(("Authorization", value));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        let body = test::read_body(resp).await.to_vec();
        (status, body)
    }

    #[actix_web::test]
    async fn test_valid_token_with_role_passes_principal() {
        let (status, body) = call(Some(bearer(&["USER"]))).await;

        assert_eq!(status, 200);
        assert_eq!(body, b"0563016466");
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthenticated() {
        let (status, body) = call(None).await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, 401);
        assert_eq!(json["code"], ErrorCode::Unauthenticated.code());
    }

    #[actix_web::test]
    async fn test_invalid_token_is_unauthenticated() {
        let (status, _) = call(Some("Bearer broken.token.value".to_string())).await;

        assert_eq!(status, 401);
    }

    #[actix_web::test]
    async fn test_missing_role_is_unauthorized() {
        let (status, body) = call(Some(bearer(&["GUEST"]))).await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, 403);
        assert_eq!(json["code"], 1007);
        assert_eq!(json["message"], "Unauthorized!");
    }

    #[actix_web::test]
    async fn test_admin_role_also_passes() {
        let (status, _) = call(Some(bearer(&["ADMIN"]))).await;

        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn test_token_without_roles_is_unauthorized() {
        let (status, _) = call(Some(bearer(&[]))).await;

        assert_eq!(status, 403);
    }
}
