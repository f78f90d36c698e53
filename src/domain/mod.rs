//! Domain layer
//! 데이터 크기 규칙, 엔티티, 실행 결과를 외부 의존성 없이 표현한다.

pub mod datasize;
pub mod entity;
pub mod error;
pub mod run;
