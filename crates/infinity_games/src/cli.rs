//! Command-line interface for infinity_games.

use clap::{Parser, Subcommand};

/// Infinity Tic-Tac-Toe - three pieces each, the oldest one vanishes
#[derive(Parser, Debug)]
#[command(name = "infinity_games")]
#[command(about = "Infinity tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "infinity_games.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play two-player hot-seat in the terminal
    Play,

    /// Apply a sequence of board indices (0-8) and print the result
    Replay {
        /// Board indices, clicked in order
        #[arg(required = true, num_args = 1..)]
        moves: Vec<usize>,

        /// Print the JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["infinity_games"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, std::path::PathBuf::from("infinity_games.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["infinity_games", "replay", "0", "3", "1", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 3, 1],
                json: true
            })
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["infinity_games", "replay"]).is_err());
    }
}
