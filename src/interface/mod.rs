//! Interface layer
//! 명령줄 진입점과 스크립트 인터프리터를 제공한다.

pub mod cli;
