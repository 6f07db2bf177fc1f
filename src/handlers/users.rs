//! # User Management HTTP Handlers
//!
//! 사용자 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 비즈니스 로직은 모두 [`UserService`]에 위임하고, 결과를 `ApiResponse` 봉투로 감싸 반환합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 인증 |
//! |--------|------|------|------|
//! | `POST` | `/api/v1/users` | 회원가입 | 없음 |
//! | `GET` | `/api/v1/users/my-info` | 본인 프로필 조회 | Bearer 토큰 (USER 또는 ADMIN) |
//!
//! 두 엔드포인트 모두 성공 시 `200 OK`와 `{"code": 1000, "result": {...}}`를 반환합니다.
//! 실패 시 `AppError`의 `ResponseError` 구현이 `{"code", "message"}` 응답을 만듭니다.

use actix_web::{get, post, web, HttpResponse};

use crate::core::AppError;
use crate::domain::dto::api_response::ApiResponse;
use crate::domain::dto::users::request::UserCreationRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 회원가입
///
/// 검증, 중복 확인, 해싱, 저장을 서비스에서 수행합니다.
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserCreationRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 본인 프로필 조회
///
/// 인증 미들웨어가 저장한 주체 키(토큰의 `sub`)로 사용자를 찾습니다.
#[get("")]
pub async fn get_my_info(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = service.get_profile(&user.principal_key).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
