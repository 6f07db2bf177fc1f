//! # Domain Models
//!
//! 영속되지 않는 도메인 모델을 정의합니다.
//!
//! - [`auth`]: 인증된 주체와 역할 요구사항
//! - [`token`]: JWT 클레임

pub mod auth;
pub mod token;
