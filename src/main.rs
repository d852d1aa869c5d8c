use anyhow::Result;

use leader_board::cli::Command;
use leader_board::{handle_completions, handle_replay, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Replay { file, top, dense, player, range, json } => {
            handle_replay(file, *top, *dense, player.clone(), *range, *json)
        }
        Command::Completions { shell } => handle_completions(*shell),
    }
}
