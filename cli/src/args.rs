//! Command line arguments and match configuration loading

use anyhow::{Context, Result};
use clap::Parser;
use last_player_core_rs::MatchConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Parser)]
#[command(name = "last-player")]
#[command(about = "Run a last-player-standing match on a rectangular board", long_about = None)]
pub struct Cli {
    /// JSON match config; any flag below overrides the matching field
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Board width in cells
    #[arg(long)]
    pub width: Option<u32>,

    /// Board height in cells
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of players
    #[arg(long)]
    pub players: Option<usize>,

    /// Players this close to each other (inclusive) are penalized
    #[arg(long)]
    pub safety_distance: Option<f64>,

    /// Distance each player walks per turn
    #[arg(long)]
    pub step: Option<f64>,

    /// RNG seed (without --config, defaults to one taken from the clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cap on random draws when searching for a placement or a move
    #[arg(long)]
    pub max_search_attempts: Option<usize>,

    /// Stop after this many turns even if the match is undecided
    #[arg(long)]
    pub max_turns: Option<usize>,

    /// Print the board before the first turn and after the last
    #[arg(long, default_value = "false")]
    pub show_board: bool,

    /// Print the final match snapshot as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl Cli {
    /// Build the match config from the config file (if any) and the flags
    pub fn match_config(&self) -> Result<MatchConfig> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => MatchConfig {
                rng_seed: clock_seed(),
                ..MatchConfig::default()
            },
        };
        Ok(self.apply_overrides(base))
    }

    fn apply_overrides(&self, mut config: MatchConfig) -> MatchConfig {
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(players) = self.players {
            config.num_players = players;
        }
        if let Some(safety_distance) = self.safety_distance {
            config.safety_distance = safety_distance;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(seed) = self.seed {
            config.rng_seed = seed;
        }
        if let Some(attempts) = self.max_search_attempts {
            config.max_search_attempts = attempts;
        }
        config
    }
}

fn load_config(path: &Path) -> Result<MatchConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn parse_config(text: &str) -> Result<MatchConfig> {
    Ok(serde_json::from_str(text)?)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(r#"{ "board_width": 40, "num_players": 4 }"#).unwrap();

        assert_eq!(config.board_width, 40);
        assert_eq!(config.num_players, 4);
        assert_eq!(config.board_height, MatchConfig::default().board_height);
        assert_eq!(config.safety_distance, MatchConfig::default().safety_distance);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(parse_config(r#"{ "board_width": "wide" }"#).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "last-player",
            "--width",
            "7",
            "--safety-distance",
            "0.5",
            "--seed",
            "99",
        ]);

        let config = cli.apply_overrides(MatchConfig::default());

        assert_eq!(config.board_width, 7);
        assert_eq!(config.board_height, 100);
        assert_eq!(config.safety_distance, 0.5);
        assert_eq!(config.rng_seed, 99);
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let cli = Cli::parse_from(["last-player", "--config", "/nonexistent/match.json"]);

        let err = cli.match_config().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/match.json"));
    }
}
