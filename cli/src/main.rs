//! Last Player Standing CLI
//!
//! Sets up a match, places every player, and plays turns until one
//! contender is left (or none, or the turn limit is hit).

mod args;
mod board;

use anyhow::{Context, Result};
use clap::Parser;
use last_player_core_rs::{Match, MatchStatus};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.match_config()?;
    info!(?config, "starting match");

    let mut game = Match::new(config).context("Failed to set up match")?;
    game.place_all_randomly().context("Failed to place players")?;

    let print_progress = !cli.json;
    if cli.show_board && print_progress {
        println!("{}\n", board::render(&game));
    }

    play(&mut game, cli.max_turns, print_progress)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        return Ok(());
    }

    if cli.show_board {
        println!("\n{}\n", board::render(&game));
    }
    report(&game);
    Ok(())
}

/// Advance turns until the match is decided or `max_turns` is reached
fn play(game: &mut Match, max_turns: Option<usize>, print_progress: bool) -> Result<()> {
    loop {
        if max_turns.is_some_and(|limit| game.turn_number() >= limit) {
            info!(turns = game.turn_number(), "turn limit reached");
            return Ok(());
        }

        let result = game
            .advance_turn()
            .with_context(|| format!("Turn {} failed", game.turn_number()))?;
        if result.status.is_decided() {
            return Ok(());
        }

        if print_progress {
            println!("{}", game.turn_number());
        }
    }
}

fn report(game: &Match) {
    let turns = game.turn_number();
    match game.status() {
        MatchStatus::Won { .. } => {
            if let Some(winner) = game.winner() {
                println!("The winner is {} ({} turns)", winner, turns);
            }
        }
        MatchStatus::NoContenders => println!("No contenders remain after {} turns", turns),
        MatchStatus::InProgress { contenders } => println!(
            "Stopped after {} turns with {} contenders remaining",
            turns, contenders
        ),
    }
}
