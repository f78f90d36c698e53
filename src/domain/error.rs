//! 스크립트 해석 과정의 오류 분류.
//! 사용자 입력 오류는 모두 복구 가능하며, 출력 싱크 I/O 실패만 세션을 중단시킨다.

use std::io;

use thiserror::Error;

/// 데이터 크기 리터럴을 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid data size: {literal:?}")]
pub struct SizeFormatError {
    pub literal: String,
}

impl SizeFormatError {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

/// 엔티티 생성 시 필드 검증 실패.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("invalid {entity} '{name}': {reason}")]
    Invalid {
        entity: &'static str,
        name: String,
        reason: String,
    },

    #[error("invalid test '{name}': {source}")]
    Size {
        name: String,
        #[source]
        source: SizeFormatError,
    },
}

impl DefinitionError {
    pub fn invalid(entity: &'static str, name: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            entity,
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// 외부 실행 엔진이 보고하는 실패.
#[derive(Debug, Error)]
#[error("run engine error: {0}")]
pub struct RunEngineError(pub String);

/// 명령 디스패치 단계의 오류.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    ArgumentParse(String),

    /// `-h/--help` 요청. 오류가 아니라 사용법 출력으로 처리된다.
    #[error("help requested")]
    HelpRequested(String),

    #[error("cannot split command: {0}")]
    Tokenize(#[from] shell_words::ParseError),

    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error("unknown {kind}: {name}")]
    UnknownEntity { kind: &'static str, name: String },

    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl CommandError {
    /// 세션을 중단해야 하는 오류인지 판단한다.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Output(_))
    }

    pub fn unknown_entity(kind: &'static str, name: &str) -> Self {
        Self::UnknownEntity {
            kind,
            name: name.to_string(),
        }
    }
}
