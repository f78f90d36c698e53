//! Infrastructure layer
//! 파일시스템/신호/실행 엔진과 직접 맞닿는 구현체 집합.

pub mod adapters;
pub mod config;
