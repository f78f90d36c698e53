//! 실행 엔진과 주고받는 값 객체.

use std::fmt;

use crate::domain::entity::{Host, Target};

/// host 참조까지 해석이 끝난 대상.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    pub target: Target,
    pub host: Host,
}

impl ResolvedTarget {
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host.address, self.target.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Failed,
    Cancelled,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub status: RunStatus,
    pub details: String,
}

impl RunOutcome {
    pub fn completed(details: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Completed,
            details: details.into(),
        }
    }

    pub fn failed(details: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Failed,
            details: details.into(),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            status: RunStatus::Cancelled,
            details: "interrupted".to_string(),
        }
    }
}
