//! 애플리케이션 조립(composition root) 모듈.

use std::io::Write;

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{ConfigRepository, InterruptSource, RunEngine};
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::run_tests::RunTestsUseCase;
use crate::infrastructure::adapters::{CtrlCInterrupt, JsonConfigRepository, PlanningEngine};
use crate::interface::cli::script::{CommandRegistry, Interpreter, InterpreterSettings};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    config: Config,
    engine: Box<dyn RunEngine>,
    interrupt: Box<dyn InterruptSource>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppComposition {
    /// 설정 파일을 병합해 읽고 기본 어댑터로 조립한다.
    pub fn configured() -> Result<Self> {
        let config = JsonConfigRepository.load()?;
        Ok(Self::new(config))
    }

    pub fn new(config: Config) -> Self {
        let engine = PlanningEngine::new(config.default_workers());
        Self::with_adapters(config, Box::new(engine), Box::new(CtrlCInterrupt))
    }

    /// 실행 엔진/중단 신호원을 외부에서 주입한다.
    pub fn with_adapters(
        config: Config,
        engine: Box<dyn RunEngine>,
        interrupt: Box<dyn InterruptSource>,
    ) -> Self {
        Self {
            config_repo: JsonConfigRepository,
            config,
            engine,
            interrupt,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// test 실행 유스케이스를 생성한다.
    pub fn run_tests_usecase(&self) -> RunTestsUseCase<'_> {
        RunTestsUseCase {
            engine: self.engine.as_ref(),
            interrupt: self.interrupt.as_ref(),
        }
    }

    /// 세션마다 새 레지스트리/저장소를 가진 인터프리터를 만든다.
    pub fn interpreter(&self, output: Box<dyn Write + Send>) -> Interpreter<'_> {
        let settings = InterpreterSettings {
            prompt: self.config.prompt(),
            continuation_prompt: self.config.continuation_prompt(),
        };
        Interpreter::new(
            CommandRegistry::standard(),
            settings,
            self.run_tests_usecase(),
            output,
        )
    }
}
