// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker deal state machine.
//!
//! A [Game] deals a single hand of Texas Hold'em to a roster of players, it
//! reveals the community cards street by street, classifies every player hand
//! after each reveal and picks the winners on the river:
//!
//! ```
//! # use showdown_game::*;
//! # fn main() -> Result<(), GameError> {
//! let roster = Roster::new(["Alice", "Bob", "Carol"])?;
//! let mut game = Game::new(roster);
//!
//! game.start_new_game()?;
//! assert_eq!(game.street(), Street::PreFlop);
//!
//! while game.street() != Street::River {
//!     game.next_action()?;
//! }
//!
//! assert_eq!(game.community_cards().len(), 5);
//! assert!(!game.winners().is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! [new_game] builds a game from a [Config] and the players names, the
//! [play_deal] function runs a deal to completion and returns a [DealResult]
//! with each player hand description and winner flag.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

use showdown_cards::CardsError;
use showdown_eval::EvalError;

pub mod game;
pub use game::{Deal, Game, Player, Street};

pub mod result;
pub use result::{DealResult, PlayerResult};

pub mod roster;
pub use roster::{OpenRegistry, Registry, Roster};

// Reexport cards and eval types.
pub use showdown_eval::{Card, Deck, Hand, HandCategory, Rank, Suit};

/// Deal errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The deck ran out of cards, there are too many players for one deck.
    #[error("Deck exhausted")]
    DeckExhausted,
    /// The players roster is not valid.
    #[error("Invalid roster: {0}")]
    Validation(String),
    /// There are no hands to pick a winner from.
    #[error("No winner")]
    NoWinner,
    /// An action on a game that has not been started.
    #[error("Game not started")]
    NotStarted,
}

impl From<CardsError> for GameError {
    fn from(e: CardsError) -> Self {
        match e {
            CardsError::DeckExhausted => GameError::DeckExhausted,
            e @ CardsError::InvalidCard(_) => GameError::Validation(e.to_string()),
        }
    }
}

impl From<EvalError> for GameError {
    fn from(e: EvalError) -> Self {
        match e {
            EvalError::NoWinner => GameError::NoWinner,
        }
    }
}

/// Deal configuration.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Seed for the deck shuffle, a random seed is used if not set.
    pub seed: Option<u64>,
    /// The names of the registered players, any name is accepted if not set.
    pub registered: Option<Vec<String>>,
}

/// Validates the players names and creates a game seeded from the config.
pub fn new_game<I, S>(config: &Config, names: I) -> Result<Game, GameError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let roster = match &config.registered {
        Some(registered) => {
            let registry = registered.iter().cloned().collect::<ahash::AHashSet<_>>();
            Roster::with_registry(names, &registry)?
        }
        None => Roster::new(names)?,
    };

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(Game::with_rng(roster, rng))
}

/// Validates the players names, deals a hand to completion and returns the
/// deal result.
pub fn play_deal<I, S>(config: &Config, names: I) -> Result<DealResult, GameError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut game = new_game(config, names)?;
    game.start_new_game()?;
    while game.street() != Street::River {
        game.next_action()?;
    }

    game.result().ok_or(GameError::NotStarted)
}
