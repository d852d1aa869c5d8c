pub mod api;
pub mod board;
pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod ranking;
pub mod seed;
pub mod services;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::ranking::RankingKind;
use crate::services::replay::{ReplayQuery, ReplayService};
use crate::services::server::ServerService;

pub use board::Leaderboard;
pub use ranking::{RankInfo, RankedIndex};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_port(port);
        let service = ServerService::new(config);
        service.run().await
    })
}

pub fn handle_replay(file: &Path, top: usize, dense: bool, player: Option<String>, range: usize, json: bool) -> Result<()> {
    let kind = if dense { RankingKind::Dense } else { RankingKind::Standard };
    let query = ReplayQuery {
        kind,
        top,
        player,
        range,
        json,
    };
    let service = ReplayService::new(file.to_path_buf(), query);
    service.run()
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
