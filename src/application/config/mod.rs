//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = "nwl: ";
pub const DEFAULT_CONTINUATION_PROMPT: &str = "____ ";
pub const DEFAULT_WORKERS: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 대화형 인터프리터 설정
    #[serde(default)]
    pub interpreter: InterpreterConfig,
    /// 실행 엔진 기본값
    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct InterpreterConfig {
    /// 기본 프롬프트
    pub prompt: Option<String>,
    /// 줄 이어쓰기 중 프롬프트
    pub continuation_prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct EngineConfig {
    /// test에 `--workers`가 없을 때 사용할 worker 수
    pub default_workers: Option<u32>,
}

impl Config {
    pub fn merge_from(&mut self, other: Config) {
        self.interpreter.merge_from(other.interpreter);
        self.engine.merge_from(other.engine);
    }

    pub fn prompt(&self) -> String {
        self.interpreter
            .prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    pub fn continuation_prompt(&self) -> String {
        self.interpreter
            .continuation_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTINUATION_PROMPT.to_string())
    }

    pub fn default_workers(&self) -> u32 {
        self.engine
            .default_workers
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_WORKERS)
    }
}

impl InterpreterConfig {
    pub fn merge_from(&mut self, other: InterpreterConfig) {
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.continuation_prompt.is_some() {
            self.continuation_prompt = other.continuation_prompt;
        }
    }
}

impl EngineConfig {
    pub fn merge_from(&mut self, other: EngineConfig) {
        if other.default_workers.is_some() {
            self.default_workers = other.default_workers;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_override_earlier_ones() {
        let mut merged: Config =
            serde_json::from_str(r#"{"interpreter":{"prompt":"a> "},"engine":{"default_workers":2}}"#)
                .unwrap();
        let overlay: Config = serde_json::from_str(r#"{"interpreter":{"prompt":"b> "}}"#).unwrap();
        merged.merge_from(overlay);

        assert_eq!(merged.prompt(), "b> ");
        assert_eq!(merged.continuation_prompt(), DEFAULT_CONTINUATION_PROMPT);
        assert_eq!(merged.default_workers(), 2);
    }

    #[test]
    fn zero_workers_falls_back_to_default() {
        let cfg: Config = serde_json::from_str(r#"{"engine":{"default_workers":0}}"#).unwrap();
        assert_eq!(cfg.default_workers(), DEFAULT_WORKERS);
    }
}
