//! 명령어 -> (인자 문법, 처리기) 레지스트리.
//! 인터프리터 생성 시 한 번 구성되며 이후 변경되지 않는다.

use std::collections::BTreeMap;

use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory};

use crate::domain::error::CommandError;
use crate::interface::cli::script::grammar::{
    DefineArgs, ExitArgs, HelpArgs, ListArgs, RoleArgs, RunArgs,
};
use crate::interface::cli::script::handlers::{
    CommandHandler, DefineHandler, ExitHandler, HelpHandler, ListHandler, Role, RoleHandler,
    RunHandler,
};

pub struct CommandSpec {
    pub grammar: clap::Command,
    pub handler: Box<dyn CommandHandler>,
}

impl CommandSpec {
    /// 명령 사용법 전문.
    pub fn usage(&self) -> String {
        self.grammar.clone().render_help().to_string()
    }

    pub fn summary(&self) -> String {
        self.grammar
            .get_about()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, CommandSpec>,
}

impl CommandRegistry {
    /// 기본 명령 세트(exit/EOF, define, run, list, server, client, help).
    pub fn standard() -> Self {
        let mut registry = Self::default();
        registry.register("exit", ExitArgs::command(), ExitHandler);
        registry.register(
            "EOF",
            ExitArgs::command().name("EOF").about("Exit from nwl (end of input)"),
            ExitHandler,
        );
        registry.register("define", DefineArgs::command(), DefineHandler);
        registry.register("run", RunArgs::command(), RunHandler);
        registry.register("list", ListArgs::command(), ListHandler);
        registry.register(
            "server",
            RoleArgs::command().name("server").about("Add server names"),
            RoleHandler(Role::Server),
        );
        registry.register(
            "client",
            RoleArgs::command().name("client").about("Add client names"),
            RoleHandler(Role::Client),
        );
        registry.register("help", HelpArgs::command(), HelpHandler);
        registry
    }

    pub fn register(
        &mut self,
        verb: &str,
        grammar: clap::Command,
        handler: impl CommandHandler + 'static,
    ) {
        self.commands.insert(
            verb.to_string(),
            CommandSpec {
                grammar,
                handler: Box::new(handler),
            },
        );
    }

    pub fn get(&self, verb: &str) -> Option<&CommandSpec> {
        self.commands.get(verb)
    }

    pub fn specs(&self) -> impl Iterator<Item = (&str, &CommandSpec)> {
        self.commands.iter().map(|(verb, spec)| (verb.as_str(), spec))
    }

    /// 첫 토큰으로 명령을 찾고 나머지 토큰에 해당 문법을 적용한다.
    pub fn parse(&self, tokens: &[String]) -> Result<(&CommandSpec, ArgMatches), CommandError> {
        let Some(verb) = tokens.first() else {
            return Err(CommandError::ArgumentParse("empty command".to_string()));
        };
        let spec = self
            .get(verb)
            .ok_or_else(|| CommandError::UnknownCommand(verb.clone()))?;

        match spec.grammar.clone().try_get_matches_from(tokens) {
            Ok(matches) => Ok((spec, matches)),
            Err(err) => Err(match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    CommandError::HelpRequested(err.render().to_string())
                }
                _ => CommandError::ArgumentParse(parse_error_line(verb, &err)),
            }),
        }
    }
}

/// clap 오류 전문에서 첫 문단만 뽑아 한 줄 진단으로 만든다.
fn parse_error_line(verb: &str, err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let summary = rendered
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let summary = summary.strip_prefix("error: ").unwrap_or(&summary);
    if summary.is_empty() {
        return format!("invalid arguments; try '{verb} --help'");
    }
    format!("{summary}; try '{verb} --help'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        shell_words::split(line).unwrap()
    }

    #[test]
    fn unknown_verb_is_reported() {
        let registry = CommandRegistry::standard();
        let err = registry.parse(&tokens("launch --now")).err().unwrap();
        assert!(matches!(err, CommandError::UnknownCommand(v) if v == "launch"));
    }

    #[test]
    fn help_flag_returns_usage_text() {
        let registry = CommandRegistry::standard();
        let err = registry.parse(&tokens("run --help")).err().unwrap();
        let text = match err {
            CommandError::HelpRequested(text) => text,
            other => panic!("expected help, got {other:?}"),
        };
        assert!(text.contains("--target"));
        assert!(text.contains("--test"));
    }

    #[test]
    fn nested_help_describes_subcommand() {
        let registry = CommandRegistry::standard();
        let err = registry.parse(&tokens("define host -h")).err().unwrap();
        let text = match err {
            CommandError::HelpRequested(text) => text,
            other => panic!("expected help, got {other:?}"),
        };
        assert!(text.contains("--address"));
    }

    #[test]
    fn missing_required_flag_is_a_single_line_parse_error() {
        let registry = CommandRegistry::standard();
        let err = registry.parse(&tokens("define host --name a")).err().unwrap();
        let msg = match err {
            CommandError::ArgumentParse(msg) => msg,
            other => panic!("expected parse error, got {other:?}"),
        };
        assert!(!msg.contains('\n'));
        assert!(msg.contains("--address"));
        assert!(msg.ends_with("try 'define --help'"));
    }

    #[test]
    fn repeatable_role_flag_collects_all_values() {
        let registry = CommandRegistry::standard();
        let (_, matches) = registry.parse(&tokens("server -n a --name b -n c")).unwrap();
        let names: Vec<&String> = matches.get_many::<String>("names").unwrap().collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn quoted_values_survive_tokenizing() {
        let registry = CommandRegistry::standard();
        let (_, matches) = registry
            .parse(&tokens(r#"run --target "east dc" --test t"#))
            .unwrap();
        assert_eq!(matches.get_one::<String>("target").unwrap(), "east dc");
    }

    #[test]
    fn every_verb_has_a_summary() {
        let registry = CommandRegistry::standard();
        for (verb, spec) in registry.specs() {
            assert!(!spec.summary().is_empty(), "{verb} has no summary");
        }
    }
}
