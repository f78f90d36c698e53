//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::entity::TestDefinition;
use crate::domain::error::RunEngineError;
use crate::domain::run::{ResolvedTarget, RunOutcome};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 실제 부하 생성기 포트. 해석이 끝난 target/test로 한 번의 실행을 수행한다.
#[async_trait]
pub trait RunEngine: Send + Sync {
    async fn run(
        &self,
        target: &ResolvedTarget,
        test: &TestDefinition,
        out: &mut (dyn Write + Send),
    ) -> Result<RunOutcome, RunEngineError>;
}

/// 진행 중인 실행을 외부에서 중단시키는 신호원 포트.
#[async_trait]
pub trait InterruptSource: Send + Sync {
    /// 중단 요청이 올 때까지 대기한다.
    async fn interrupted(&self);
}
