//! 원시 입력 줄을 논리 명령으로 조립한다.
//! `\`로 끝나는 줄은 다음 줄과 이어 붙이고, `#`로 시작하는 줄은 무시한다.

const CONTINUATION_MARKER: char = '\\';
const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assembled {
    /// 이어지는 줄을 더 읽어야 한다.
    Pending,
    /// 완성된 명령. 주석 줄은 빈 문자열(no-op)로 나온다.
    Command(String),
}

#[derive(Debug, Default)]
pub struct LineAssembler {
    pending: String,
}

impl LineAssembler {
    pub fn push(&mut self, line: &str) -> Assembled {
        if let Some(head) = line.strip_suffix(CONTINUATION_MARKER) {
            self.pending.push_str(head);
            return Assembled::Pending;
        }

        let mut assembled = std::mem::take(&mut self.pending);
        assembled.push_str(line);

        if assembled.trim_start().starts_with(COMMENT_MARKER) {
            return Assembled::Command(String::new());
        }
        Assembled::Command(assembled)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// 완성되지 못한 버퍼를 비우고 돌려준다.
    pub fn take_pending(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.pending))
    }
}
