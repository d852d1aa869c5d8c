use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "live player leaderboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the leaderboard HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Apply a JSON file of score updates and print the resulting ranking
    Replay {
        /// Path to a JSON array of {playerId, score, timestamp?}
        file: PathBuf,
        /// Number of top players to print
        #[arg(short, long, default_value_t = 10)]
        top: usize,
        /// Use dense ranking (ties share a rank)
        #[arg(short, long)]
        dense: bool,
        /// Print the players around this one instead of the top list
        #[arg(long)]
        player: Option<String>,
        /// Neighbourhood size used with --player
        #[arg(short, long, default_value_t = 5)]
        range: usize,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["leader_board", "replay", "scores.json", "--dense", "--player", "bob", "-r", "2"]).unwrap();

        match cli.command {
            Command::Replay { file, top, dense, player, range, json } => {
                assert_eq!(file, PathBuf::from("scores.json"));
                assert_eq!(top, 10);
                assert!(dense);
                assert_eq!(player.as_deref(), Some("bob"));
                assert_eq!(range, 2);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_range_is_rejected() {
        assert!(Cli::try_parse_from(["leader_board", "replay", "scores.json", "--range", "-1"]).is_err());
    }
}
