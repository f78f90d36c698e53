//! 명령별 처리기.
//! 파싱이 끝난 인자를 받아 세션 상태를 바꾸거나 실행 유스케이스를 호출한다.

use std::collections::BTreeSet;
use std::io::Write;

use async_trait::async_trait;
use clap::{ArgMatches, FromArgMatches};
use tracing::info;

use crate::application::usecases::run_tests::{RunRequest, RunTestsUseCase};
use crate::domain::datasize;
use crate::domain::entity::{EntityStore, Host, RoleRoster, Target, TestDefinition};
use crate::domain::error::CommandError;
use crate::interface::cli::script::grammar::{
    DefineArgs, DefineEntity, HelpArgs, RoleArgs, RunArgs,
};
use crate::interface::cli::script::registry::CommandRegistry;

/// 명령 처리 후 인터프리터 루프의 다음 동작.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// 한 세션 동안 유지되는 상태.
#[derive(Debug, Default)]
pub struct Session {
    pub store: EntityStore,
    pub roles: RoleRoster,
}

/// 처리기에 빌려주는 실행 문맥.
pub struct CommandContext<'c> {
    pub session: &'c mut Session,
    pub out: &'c mut (dyn Write + Send),
    pub run_tests: &'c RunTestsUseCase<'c>,
    pub registry: &'c CommandRegistry,
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(
        &self,
        matches: &ArgMatches,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError>;
}

fn extract<T: FromArgMatches>(matches: &ArgMatches) -> Result<T, CommandError> {
    T::from_arg_matches(matches).map_err(|err| CommandError::ArgumentParse(err.to_string()))
}

pub struct ExitHandler;

#[async_trait]
impl CommandHandler for ExitHandler {
    async fn execute(
        &self,
        _matches: &ArgMatches,
        _ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}

pub struct DefineHandler;

#[async_trait]
impl CommandHandler for DefineHandler {
    async fn execute(
        &self,
        matches: &ArgMatches,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let args: DefineArgs = extract(matches)?;
        let store = &mut ctx.session.store;

        match args.entity {
            DefineEntity::Host(host) => {
                let host = Host::new(&host.name, &host.address)?;
                info!(name = %host.name, address = %host.address, "defined host");
                store.put_host(host);
            }
            DefineEntity::Target(target) => {
                let target = Target::new(&target.name, &target.host, target.port)?;
                info!(name = %target.name, host = %target.host, "defined target");
                store.put_target(target);
            }
            DefineEntity::Test(test) => {
                let test = TestDefinition::new(&test.name, &test.size, test.count, test.workers)?;
                info!(name = %test.name, size = test.size, "defined test");
                store.put_test(test);
            }
        }

        Ok(Flow::Continue)
    }
}

pub struct RunHandler;

#[async_trait]
impl CommandHandler for RunHandler {
    async fn execute(
        &self,
        matches: &ArgMatches,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let args: RunArgs = extract(matches)?;
        let request = RunRequest {
            target: args.target,
            tests: args.tests,
        };

        ctx.run_tests
            .execute(&ctx.session.store, &request, &mut *ctx.out)
            .await?;
        Ok(Flow::Continue)
    }
}

pub struct ListHandler;

#[async_trait]
impl CommandHandler for ListHandler {
    async fn execute(
        &self,
        _matches: &ArgMatches,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let session = &*ctx.session;
        let out = &mut *ctx.out;

        for host in session.store.hosts() {
            writeln!(out, "host {} {}", host.name, host.address)?;
        }
        for target in session.store.targets() {
            writeln!(out, "target {} {}:{}", target.name, target.host, target.port)?;
        }
        for test in session.store.tests() {
            writeln!(
                out,
                "test {} {} x{}",
                test.name,
                datasize::format(test.size),
                test.count
            )?;
        }
        let servers: BTreeSet<&String> = session.roles.servers.iter().collect();
        for server in servers {
            writeln!(out, "server {server}")?;
        }
        let clients: BTreeSet<&String> = session.roles.clients.iter().collect();
        for client in clients {
            writeln!(out, "client {client}")?;
        }

        Ok(Flow::Continue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Server,
    Client,
}

/// 레거시 역할 명령. 이름은 누적되며 엔티티 저장소와는 무관하다.
pub struct RoleHandler(pub Role);

#[async_trait]
impl CommandHandler for RoleHandler {
    async fn execute(
        &self,
        matches: &ArgMatches,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let args: RoleArgs = extract(matches)?;
        let roles = &mut ctx.session.roles;
        let (label, members) = match self.0 {
            Role::Server => ("servers", &mut roles.servers),
            Role::Client => ("clients", &mut roles.clients),
        };
        members.extend(args.names);

        writeln!(ctx.out, "{label}: {}", members.join(", "))?;
        Ok(Flow::Continue)
    }
}

pub struct HelpHandler;

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn execute(
        &self,
        matches: &ArgMatches,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let args: HelpArgs = extract(matches)?;

        match args.verb {
            Some(verb) => {
                let spec = ctx
                    .registry
                    .get(&verb)
                    .ok_or(CommandError::UnknownCommand(verb))?;
                write!(ctx.out, "{}", spec.usage())?;
            }
            None => {
                writeln!(ctx.out, "commands:")?;
                for (verb, spec) in ctx.registry.specs() {
                    writeln!(ctx.out, "  {verb:<8} {}", spec.summary())?;
                }
            }
        }

        Ok(Flow::Continue)
    }
}
