use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, ErrorCode};

/// JWT 토큰에서 추출된 인증 주체 정보
///
/// 인증 미들웨어가 검증에 성공하면 요청 extensions에 저장되며,
/// 핸들러는 이 타입을 인자로 선언하여 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 주체 키 (토큰의 `sub`, 사용자의 휴대폰 번호)
    pub principal_key: String,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::new(ErrorCode::Unauthenticated))),
        }
    }
}
