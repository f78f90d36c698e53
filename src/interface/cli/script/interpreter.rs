//! 스크립트 인터프리터 루프.
//!
//! 줄 조립 -> 셸 방식 토큰 분리 -> 레지스트리 조회 -> 명령별 문법 -> 처리기 순서로
//! 한 명령씩 끝까지 처리한 뒤 다음 줄을 읽는다. 사용자 입력 오류는 한 줄 진단을
//! 출력하고 계속 진행하며, 세션은 `exit` 또는 입력 끝에서만 종료된다.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, trace, warn};

use crate::application::usecases::run_tests::RunTestsUseCase;
use crate::domain::entity::{EntityStore, RoleRoster};
use crate::domain::error::CommandError;
use crate::interface::cli::script::handlers::{CommandContext, Flow, Session};
use crate::interface::cli::script::line_assembler::{Assembled, LineAssembler};
use crate::interface::cli::script::registry::CommandRegistry;
use crate::interface::cli::script::source::ScriptSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterState {
    Idle,
    ReadingLine,
    Continuing,
    Dispatching,
    Exited,
}

/// 세션 종료 사유. 둘 다 정상 종료다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    EndOfInput,
}

#[derive(Debug, Clone)]
pub struct InterpreterSettings {
    pub prompt: String,
    pub continuation_prompt: String,
}

pub struct Interpreter<'a> {
    registry: CommandRegistry,
    assembler: LineAssembler,
    session: Session,
    run_tests: RunTestsUseCase<'a>,
    output: Box<dyn Write + Send>,
    settings: InterpreterSettings,
    state: InterpreterState,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        registry: CommandRegistry,
        settings: InterpreterSettings,
        run_tests: RunTestsUseCase<'a>,
        output: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            registry,
            assembler: LineAssembler::default(),
            session: Session::default(),
            run_tests,
            output,
            settings,
            state: InterpreterState::Idle,
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.session.store
    }

    pub fn roles(&self) -> &RoleRoster {
        &self.session.roles
    }

    pub fn state(&self) -> InterpreterState {
        self.state
    }

    /// 입력원이 끝나거나 `exit`가 올 때까지 명령을 처리한다.
    pub async fn run(&mut self, source: &mut ScriptSource) -> Result<SessionEnd> {
        loop {
            let prompt = if self.assembler.has_pending() {
                &self.settings.continuation_prompt
            } else {
                &self.settings.prompt
            };
            source.show_prompt(prompt)?;

            self.set_state(InterpreterState::ReadingLine);
            let Some(line) = source.read_line()? else {
                if let Some(unfinished) = self.assembler.take_pending() {
                    debug!(%unfinished, "discarding unfinished continued command");
                }
                self.set_state(InterpreterState::Exited);
                self.output.flush()?;
                return Ok(SessionEnd::EndOfInput);
            };

            if self.feed_line(&line).await? == Flow::Exit {
                self.set_state(InterpreterState::Exited);
                self.output.flush()?;
                return Ok(SessionEnd::Exit);
            }
        }
    }

    /// 원시 입력 한 줄을 넣는다. 이어쓰기 중이면 아무것도 실행하지 않는다.
    pub async fn feed_line(&mut self, line: &str) -> Result<Flow> {
        match self.assembler.push(line) {
            Assembled::Pending => {
                self.set_state(InterpreterState::Continuing);
                Ok(Flow::Continue)
            }
            Assembled::Command(command) => self.execute(&command).await,
        }
    }

    /// 완성된 명령 한 개를 처리한다. 출력 싱크 I/O 실패만 오류로 돌려준다.
    pub async fn execute(&mut self, command: &str) -> Result<Flow> {
        self.set_state(InterpreterState::Dispatching);
        let result = self.dispatch(command).await;
        self.set_state(InterpreterState::Idle);

        let flow = match result {
            Ok(flow) => flow,
            Err(CommandError::HelpRequested(usage)) => {
                write!(self.output, "{usage}")?;
                if !usage.ends_with('\n') {
                    writeln!(self.output)?;
                }
                Flow::Continue
            }
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => {
                warn!(%command, "command failed: {err}");
                writeln!(self.output, "error: {err}")?;
                Flow::Continue
            }
        };

        self.output.flush()?;
        Ok(flow)
    }

    async fn dispatch(&mut self, command: &str) -> Result<Flow, CommandError> {
        let tokens = split_words(command)?;
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }
        debug!(verb = %tokens[0], "dispatching");

        let (spec, matches) = self.registry.parse(&tokens)?;
        let mut ctx = CommandContext {
            session: &mut self.session,
            out: &mut *self.output,
            run_tests: &self.run_tests,
            registry: &self.registry,
        };
        spec.handler.execute(&matches, &mut ctx).await
    }

    fn set_state(&mut self, next: InterpreterState) {
        trace!(from = ?self.state, to = ?next, "interpreter state");
        self.state = next;
    }
}

/// 셸 방식으로 단어를 나눈다. 주석은 줄 조립 단계에서만 처리하므로
/// 따옴표 밖에서 `#`로 시작하는 단어도 일반 단어로 남긴다.
fn split_words(command: &str) -> Result<Vec<String>, shell_words::ParseError> {
    let mut protected = String::with_capacity(command.len());
    let mut quote = None;
    let mut escaped = false;
    let mut word_start = true;

    for ch in command.chars() {
        let was_escaped = escaped;
        if escaped {
            escaped = false;
        } else if let Some(open) = quote {
            if ch == open {
                quote = None;
            } else if ch == '\\' && open == '"' {
                escaped = true;
            }
        } else {
            match ch {
                '#' if word_start => protected.push('\\'),
                '\\' => escaped = true,
                '\'' | '"' => quote = Some(ch),
                _ => {}
            }
        }
        word_start = !was_escaped && quote.is_none() && ch.is_whitespace();
        protected.push(ch);
    }

    shell_words::split(&protected)
}
