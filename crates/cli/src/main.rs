// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, deals a hand of Texas Hold'em and prints the winners.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::error;

use showdown_game::{Card, Config, DealResult, Game, Street};

#[derive(Debug, Parser)]
struct Cli {
    /// The players names in seating order.
    #[clap(required = true)]
    names: Vec<String>,
    /// Seed for the deck shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Comma separated names of the registered players.
    #[clap(long, short, value_delimiter = ',')]
    registered: Option<Vec<String>>,
    /// Print the deal result as JSON.
    #[clap(long)]
    json: bool,
    /// Print the players hands after each street.
    #[clap(long, conflicts_with = "json")]
    streets: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config {
        seed: cli.seed,
        registered: cli.registered,
    };

    if cli.streets {
        let result = play_streets(&config, cli.names)?;
        println!("{result}");
    } else {
        let result = showdown_game::play_deal(&config, cli.names)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{result}");
        }
    }

    Ok(())
}

/// Steps a deal one street at a time printing each player hand.
fn play_streets(config: &Config, names: Vec<String>) -> Result<DealResult> {
    let mut game = showdown_game::new_game(config, names)?;
    game.start_new_game()?;

    loop {
        print_street(&game);
        if game.street() == Street::River {
            break;
        }

        game.next_action()?;
    }

    match game.result() {
        Some(result) => Ok(result),
        None => bail!("deal did not reach the river"),
    }
}

fn print_street(game: &Game) {
    let board = cards_to_string(game.community_cards());
    println!("{} {board}", game.street());

    for player in game.players() {
        let hand = player.hand().map(|h| h.to_string()).unwrap_or_default();
        println!(
            "  {:<12} {}  {hand}",
            player.name(),
            cards_to_string(player.hole_cards())
        );
    }
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
