//! # HTTP Handlers
//!
//! 요청 추출과 응답 직렬화만 담당하는 얇은 계층입니다.

pub mod users;
