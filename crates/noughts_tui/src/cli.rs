//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use noughts::GameMode;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe for two players or against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "noughts.toml", global = true)]
    pub config: PathBuf,

    /// Delay before the computer answers, in milliseconds
    #[arg(long, global = true)]
    pub ai_delay_ms: Option<u64>,

    /// Seed for the computer's random choices
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Name shown for the computer opponent
    #[arg(long, global = true)]
    pub ai_label: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Replay a move list headlessly and print the final state as JSON
    Replay {
        /// Game mode: pvp or ai
        #[arg(long, value_parser = parse_mode)]
        mode: GameMode,

        /// Cell indices 0-8 in play order, comma separated
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,

        /// Name for player 1 (X)
        #[arg(long, default_value = "Player 1")]
        player_one: String,

        /// Name for player 2 (O), ignored against the computer
        #[arg(long, default_value = "Player 2")]
        player_two: String,
    },
}

impl Cli {
    /// The command to run, `play` if none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

fn parse_mode(s: &str) -> Result<GameMode, String> {
    GameMode::from_short(s).ok_or_else(|| format!("unknown mode '{s}', expected pvp or ai"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.command(), Command::Play);
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
        assert_eq!(cli.ai_delay_ms, None);
    }

    #[test]
    fn test_replay_parses_moves() {
        let cli = Cli::try_parse_from([
            "noughts", "replay", "--mode", "ai", "--moves", "0,4,8", "--seed", "3",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(3));
        let Command::Replay { mode, moves, .. } = cli.command() else {
            panic!("expected replay");
        };
        assert_eq!(mode, GameMode::PlayerVsAi);
        assert_eq!(moves, vec![0, 4, 8]);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["noughts", "replay", "--mode", "chess", "--moves", "0"]).is_err());
    }
}
