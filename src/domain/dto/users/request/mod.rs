//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`web::Json` 추출 단계)
//! 2. **형식 검증**: 길이, 이메일, 전화번호, 나이 규칙 (`validator`)
//! 3. **비즈니스 검증**: 아이디/전화번호 중복 (서비스 계층)
//!
//! 형식 검증 실패는 `validator::ValidationErrors`로 반환되며,
//! `AppError`로 변환될 때 가장 낮은 숫자 코드를 가진 에러 하나만 응답에 실립니다.

pub mod create_user;

pub use create_user::UserCreationRequest;
