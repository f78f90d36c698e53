//! 실행 중단 신호원 어댑터.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::application::ports::InterruptSource;

/// Ctrl-C(SIGINT)를 중단 요청으로 취급한다.
pub struct CtrlCInterrupt;

#[async_trait]
impl InterruptSource for CtrlCInterrupt {
    async fn interrupted(&self) {
        if let Err(err) = tokio::signal::ctrl_c().await {
            // 신호 등록에 실패하면 중단 없이 실행을 끝까지 기다린다.
            warn!("failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    }
}

/// 취소 토큰 기반 신호원. 프로그램 내부에서 실행을 중단할 때 사용한다.
#[derive(Clone)]
pub struct TokenInterrupt {
    token: CancellationToken,
}

impl TokenInterrupt {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

#[async_trait]
impl InterruptSource for TokenInterrupt {
    async fn interrupted(&self) {
        self.token.cancelled().await;
    }
}
