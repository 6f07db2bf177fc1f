//! # Core Module
//!
//! 서비스 전반에서 공유하는 에러 체계를 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`error_code`] - 에러 코드 레지스트리
//! - **ErrorCode**: 숫자 코드, 메시지 템플릿, HTTP 상태를 가진 닫힌 열거형
//! - **플레이스홀더 치환**: `{min}` 템플릿을 실제 제약 값으로 렌더링
//! - **키 조회**: 검증 규칙의 심볼 키 → ErrorCode 역방향 조회
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: ErrorCode 하나를 품은 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **검증 통합**: `validator::ValidationErrors` → AppError 변환
//! - **자동 변환**: `ErrorContext`를 통한 외부 에러 감싸기
//!
//! ## 에러 흐름
//!
//! ```text
//! DTO 검증 실패 ──┐
//! 중복/미존재 ────┼──► AppError(ErrorCode) ──► ResponseError ──► {code, message}
//! 인프라 오류 ────┘        (9999 fallback)
//! ```

pub mod error_code;
pub mod errors;

pub use error_code::*;
pub use errors::*;
