//! 스크립트 입력원과 결과 출력 싱크.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// 명령 줄을 읽어 오는 입력원.
/// 대화형 입력일 때만 프롬프트를 출력할 곳을 가진다.
pub struct ScriptSource {
    reader: Box<dyn BufRead + Send>,
    prompt_out: Option<Box<dyn Write + Send>>,
    line_no: usize,
}

impl ScriptSource {
    /// 파일/파이프 등 비대화형 입력. 프롬프트를 출력하지 않는다.
    pub fn script(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            prompt_out: None,
            line_no: 0,
        }
    }

    pub fn interactive(
        reader: impl BufRead + Send + 'static,
        prompt_out: impl Write + Send + 'static,
    ) -> Self {
        Self {
            reader: Box::new(reader),
            prompt_out: Some(Box::new(prompt_out)),
            line_no: 0,
        }
    }

    /// 경로가 없거나 `-`이면 표준 입력을 사용한다.
    /// 표준 입력이 터미널일 때만 대화형으로 본다.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path.filter(|p| *p != Path::new("-")) {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open script {}", path.display()))?;
                Ok(Self::script(BufReader::new(file)))
            }
            None => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    Ok(Self::interactive(BufReader::new(stdin), io::stdout()))
                } else {
                    Ok(Self::script(BufReader::new(stdin)))
                }
            }
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.prompt_out.is_some()
    }

    /// 줄바꿈을 제거한 한 줄. 입력 끝이면 `None`.
    /// UTF-8이 아닌 바이트는 대체 문자로 바꾸고 계속 읽는다.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => {
                let reason = err.utf8_error();
                warn!(line = self.line_no, "input line is not valid UTF-8: {reason}");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        Ok(Some(line))
    }

    pub fn show_prompt(&mut self, prompt: &str) -> io::Result<()> {
        if let Some(out) = self.prompt_out.as_mut() {
            write!(out, "{prompt}")?;
            out.flush()?;
        }
        Ok(())
    }
}

/// 경로가 없거나 `-`이면 표준 출력으로 쓴다.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path.filter(|p| *p != Path::new("-")) {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    #[test]
    fn strips_line_endings() {
        let mut source = ScriptSource::script(Cursor::new("exit\r\nlist\nlast"));

        assert_eq!(source.read_line().unwrap().as_deref(), Some("exit"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("list"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut source = ScriptSource::script(Cursor::new(b"# caf\xe9\nlist\n".to_vec()));

        assert_eq!(source.read_line().unwrap().as_deref(), Some("# caf\u{fffd}"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("list"));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn script_source_never_prompts() {
        let source = ScriptSource::script(Cursor::new(""));
        assert!(!source.is_interactive());
    }

    #[test]
    fn opens_script_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.nwl");
        std::fs::write(&path, "exit\n").unwrap();

        let mut source = ScriptSource::open(Some(path.as_path())).unwrap();
        assert!(!source.is_interactive());
        assert_eq!(source.read_line().unwrap().as_deref(), Some("exit"));
    }

    #[test]
    fn missing_script_names_the_path() {
        let err = ScriptSource::open(Some(Path::new("/nonexistent/plan.nwl")))
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("/nonexistent/plan.nwl"));
    }
}
