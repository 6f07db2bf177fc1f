//! JWT 토큰 검증 서비스 구현
//!
//! 외부 인증 서버가 HS256으로 서명한 액세스 토큰을 검증하고 클레임을 추출합니다.
//! 토큰 발급은 이 서비스의 책임이 아닙니다.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::core::{AppError, AppResult, ErrorCode};
use crate::domain::models::token::TokenClaims;

/// 토큰 검증 서비스
///
/// 비밀키로 만든 `DecodingKey`를 보관하므로 요청마다 환경 변수를 다시 읽지 않습니다.
#[derive(Clone)]
pub struct TokenService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    ///
    /// 실패 원인(만료, 서명 불일치, 형식 오류)과 관계없이 `UNAUTHENTICATED`를 반환합니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                AppError::new(ErrorCode::Unauthenticated)
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::new(ErrorCode::Unauthenticated)),
        }
    }
}
