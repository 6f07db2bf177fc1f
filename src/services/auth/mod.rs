//! 인증 관련 서비스
//!
//! 현재는 JWT 검증만 제공합니다. 로그인과 토큰 발급은 외부 인증 서버가 담당합니다.

pub mod token_service;

pub use token_service::TokenService;
