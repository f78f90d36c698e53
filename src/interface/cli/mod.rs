//! CLI 인터페이스 모듈 묶음.
//! 인자 파싱/스크립트 인터프리터/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod script;

pub use command::{Cli, CliAction, ScriptOptions};
pub use composition::AppComposition;
