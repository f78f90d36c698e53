//! 스크립트 명령별 인자 문법(clap).

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "exit", about = "Exit from nwl")]
pub struct ExitArgs {}

#[derive(Debug, Parser)]
#[command(
    name = "define",
    about = "Define a host, target, or test",
    subcommand_required = true,
    disable_help_subcommand = true
)]
pub struct DefineArgs {
    #[command(subcommand)]
    pub entity: DefineEntity,
}

#[derive(Debug, Subcommand)]
pub enum DefineEntity {
    /// Define a network host
    Host(HostArgs),
    /// Define a target endpoint on a defined host
    Target(TargetArgs),
    /// Define a transfer test
    Test(TestArgs),
}

#[derive(Debug, Args)]
pub struct HostArgs {
    /// Host name
    #[arg(long)]
    pub name: String,

    /// Network address
    #[arg(long)]
    pub address: String,
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Target name
    #[arg(long)]
    pub name: String,

    /// Name of the host serving this target
    #[arg(long)]
    pub host: String,

    /// Port on the host (default 5001)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Args)]
pub struct TestArgs {
    /// Test name
    #[arg(long)]
    pub name: String,

    /// Bytes per transfer, e.g. 64KiB, 10M, 1.5g
    #[arg(long)]
    pub size: String,

    /// Number of transfers
    #[arg(long)]
    pub count: Option<u32>,

    /// Parallel workers
    #[arg(long)]
    pub workers: Option<u32>,
}

#[derive(Debug, Parser)]
#[command(name = "run", about = "Run tests against a target")]
pub struct RunArgs {
    /// Target name
    #[arg(long)]
    pub target: String,

    /// Test name (repeatable, runs in order)
    #[arg(long = "test", value_name = "TEST", required = true)]
    pub tests: Vec<String>,
}

#[derive(Debug, Parser)]
#[command(name = "list", about = "List defined hosts, targets, tests, and roles")]
pub struct ListArgs {}

// `server`/`client` 공용 문법. 이름은 등록 시 덮어쓴다.
#[derive(Debug, Parser)]
#[command(name = "role")]
pub struct RoleArgs {
    /// Role member name (repeatable)
    #[arg(short = 'n', long = "name", required = true)]
    pub names: Vec<String>,
}

#[derive(Debug, Parser)]
#[command(name = "help", about = "List commands or show a command's usage")]
pub struct HelpArgs {
    /// Command to describe
    pub verb: Option<String>,
}
