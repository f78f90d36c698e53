//! 실제 트래픽 없이 실행 계획만 출력하는 실행 엔진 어댑터.

use std::io::Write;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::RunEngine;
use crate::domain::datasize;
use crate::domain::entity::TestDefinition;
use crate::domain::error::RunEngineError;
use crate::domain::run::{ResolvedTarget, RunOutcome};

/// 해석된 target/test를 계획 한 줄로 기록하고 성공을 보고한다.
/// 실제 부하 생성기는 같은 포트를 구현해 이 자리에 주입된다.
pub struct PlanningEngine {
    default_workers: u32,
}

impl PlanningEngine {
    pub fn new(default_workers: u32) -> Self {
        Self {
            default_workers: default_workers.max(1),
        }
    }
}

#[async_trait]
impl RunEngine for PlanningEngine {
    async fn run(
        &self,
        target: &ResolvedTarget,
        test: &TestDefinition,
        out: &mut (dyn Write + Send),
    ) -> Result<RunOutcome, RunEngineError> {
        let workers = test.workers.unwrap_or(self.default_workers);
        let total = test.size.saturating_mul(u64::from(test.count));
        debug!(test = %test.name, workers, total, "planning run");

        writeln!(
            out,
            "plan: {} -> {} size={} count={} workers={}",
            test.name,
            target.endpoint(),
            datasize::format(test.size),
            test.count,
            workers
        )
        .map_err(|err| RunEngineError(format!("failed to write plan: {err}")))?;

        Ok(RunOutcome::completed(format!(
            "planned {} in {} transfer(s)",
            datasize::format(total),
            test.count
        )))
    }
}
