//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 전달하는 응답 DTO를 정의합니다.
//! 비밀번호 해시 같은 민감한 필드는 응답 타입에 존재하지 않습니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "42e2-bae5-9ea7c0f1c4d4",
//!   "username": "test02",
//!   "firstName": "quang",
//!   "lastName": "tran",
//!   "email": "test02@gmail.com",
//!   "dob": "2000-01-01",
//!   "phoneNumber": "0563016466"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
