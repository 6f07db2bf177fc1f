//! # Caching Module
//!
//! MongoDB 사용자 저장소의 조회 캐시로 사용하는 Redis 클라이언트입니다.
//! 캐시 실패는 조회 결과에 영향을 주지 않으며, 호출자는 에러를 무시하고 DB로 진행합니다.

pub mod redis;
