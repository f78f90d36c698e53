//! 스크립트 인터프리터 모듈 묶음.
//! 줄 조립, 명령 문법, 레지스트리, 처리기, 루프를 한 네임스페이스로 관리한다.

pub mod grammar;
pub mod handlers;
pub mod interpreter;
pub mod line_assembler;
pub mod registry;
pub mod source;

pub use handlers::{Flow, Session};
pub use interpreter::{Interpreter, InterpreterSettings, InterpreterState, SessionEnd};
pub use line_assembler::{Assembled, LineAssembler};
pub use registry::CommandRegistry;
pub use source::{ScriptSource, open_output};
