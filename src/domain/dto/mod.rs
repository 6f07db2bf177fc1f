//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 엔티티와 DTO를 분리하여 내부 표현이 API 계약에 새어 나가지 않도록 합니다.
//!
//! ## 응답 봉투
//!
//! 모든 응답은 [`ApiResponse`](api_response::ApiResponse)로 감싸집니다.
//!
//! ```json
//! { "code": 1000, "result": { "username": "test02" } }
//! { "code": 1001, "message": "User existed" }
//! ```

pub mod api_response;
pub mod users;

pub use api_response::{ApiResponse, SUCCESS_CODE};
