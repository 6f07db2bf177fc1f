//! # Domain Entities Module
//!
//! 비즈니스 도메인의 영속 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되며, 인메모리 저장소에서도 동일한 구조를 사용합니다.
//!
//! ## 엔티티 설계 원칙
//!
//! - **식별성**: `_id`는 저장 시점에 UUID 문자열로 채워짐
//! - **유일성**: `username`, `phone_number`는 저장소 유니크 인덱스로 보호
//! - **민감 정보**: `password`는 해시만 저장하며 응답 DTO로 복사되지 않음

pub mod users;
