//! nwload library root.
//! 네트워크 부하 테스트 스크립트를 읽어 명령을 해석/실행하는 계층을 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use domain::datasize;
use interface::cli::script::{ScriptSource, SessionEnd, open_output};
use interface::cli::{AppComposition, ScriptOptions};

/// 라이브러리 직접 호출용 스크립트 실행 함수.
pub async fn run_script(options: ScriptOptions) -> Result<SessionEnd> {
    let composition = AppComposition::configured()?;
    let mut source = ScriptSource::open(options.cmdfile.as_deref())?;
    let output = open_output(options.output.as_deref())?;
    let mut interpreter = composition.interpreter(output);
    interpreter.run(&mut source).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
