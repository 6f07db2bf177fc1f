//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 핸들러는 `web::Data`로 서비스를 주입받아 호출합니다.
//!
//! - [`users::UserService`]: 회원가입, 본인 프로필 조회
//! - [`auth::TokenService`]: Bearer 토큰 검증

pub mod auth;
pub mod users;
