//! CLI 명령 파싱 모듈.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "nwload")]
#[command(about = "Test network performance.")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Command script to read (`-` or omitted for standard input)
    cmdfile: Option<PathBuf>,

    /// File for output of test results (`-` or omitted for standard output)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config
    Config,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptOptions {
    pub cmdfile: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub enum CliAction {
    InspectConfig,
    Script(ScriptOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        match self.command {
            Some(Commands::Config) => Ok(CliAction::InspectConfig),
            None => {
                let cmdfile = self.cmdfile.filter(|p| p != Path::new("-"));
                let output = self.output.filter(|p| p != Path::new("-"));

                // 같은 파일을 읽으면서 덮어쓰지 않도록 막는다.
                if let (Some(input), Some(out)) = (&cmdfile, &output)
                    && input == out
                {
                    return Err(format!(
                        "script and output must differ: {}",
                        input.display()
                    ));
                }

                Ok(CliAction::Script(ScriptOptions { cmdfile, output }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> Result<CliAction, String> {
        Cli::try_parse_from(args).unwrap().into_action()
    }

    #[test]
    fn defaults_to_stdin_and_stdout() {
        let Ok(CliAction::Script(options)) = action(&["nwload"]) else {
            panic!("expected script action");
        };
        assert!(options.cmdfile.is_none());
        assert!(options.output.is_none());

        let Ok(CliAction::Script(options)) = action(&["nwload", "-", "--output", "-"]) else {
            panic!("expected script action");
        };
        assert!(options.cmdfile.is_none());
        assert!(options.output.is_none());
    }

    #[test]
    fn reads_script_and_output_paths() {
        let Ok(CliAction::Script(options)) =
            action(&["nwload", "plan.nwl", "--output", "results.txt"])
        else {
            panic!("expected script action");
        };
        assert_eq!(options.cmdfile, Some(PathBuf::from("plan.nwl")));
        assert_eq!(options.output, Some(PathBuf::from("results.txt")));
    }

    #[test]
    fn config_subcommand_inspects() {
        assert!(matches!(action(&["nwload", "config"]), Ok(CliAction::InspectConfig)));
    }

    #[test]
    fn same_script_and_output_is_rejected() {
        assert!(action(&["nwload", "a.nwl", "--output", "a.nwl"]).is_err());
    }
}
