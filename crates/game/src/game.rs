// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game types.
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Deck};
use showdown_eval::Hand;

use crate::{DealResult, GameError, Roster};

mod player;
pub use player::Player;

mod state;
pub use state::Deal;

/// A deal street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// No cards have been dealt.
    NotStarted,
    /// Hole cards dealt, no community cards.
    PreFlop,
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// Five community cards, the deal is complete.
    River,
}

impl Street {
    /// The number of community cards on this street.
    pub fn community_cards(&self) -> usize {
        match self {
            Street::NotStarted | Street::PreFlop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// The street that follows this one, the river is the last street.
    pub fn next(&self) -> Street {
        match self {
            Street::NotStarted => Street::PreFlop,
            Street::PreFlop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn | Street::River => Street::River,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::NotStarted => "Not started",
            Street::PreFlop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        f.write_str(street)
    }
}

/// A game that deals hands to a fixed roster of players.
#[derive(Debug)]
pub struct Game {
    roster: Roster,
    rng: StdRng,
    deal: Option<Deal>,
}

impl Game {
    /// Creates a new game with randomness from the OS.
    pub fn new(roster: Roster) -> Self {
        Self::with_rng(roster, StdRng::from_os_rng())
    }

    /// Creates a new game with user initialized randomness.
    pub fn with_rng(roster: Roster, rng: StdRng) -> Self {
        Self {
            roster,
            rng,
            deal: None,
        }
    }

    /// Starts a new deal.
    ///
    /// Drops any previous deal, shuffles a new deck and deals two hole cards to
    /// each player.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        self.deal = None;

        info!("Starting new deal for {} players", self.roster.len());

        let deck = Deck::new_and_shuffled(&mut self.rng);
        let deal = Deal::start(&self.roster, deck).inspect_err(|e| error!("Deal aborted: {e}"))?;
        self.deal = Some(deal);

        Ok(())
    }

    /// Deals the next street and returns the new street.
    ///
    /// On the river this is a no-op. An error aborts the deal and the game must
    /// be started again.
    pub fn next_action(&mut self) -> Result<Street, GameError> {
        let deal = self.deal.take().ok_or(GameError::NotStarted)?;
        let next = deal.next().inspect_err(|e| error!("Deal aborted: {e}"))?;

        let street = next.street();
        self.deal = Some(next);
        Ok(street)
    }

    /// The current street.
    pub fn street(&self) -> Street {
        self.deal
            .as_ref()
            .map(Deal::street)
            .unwrap_or(Street::NotStarted)
    }

    /// The current deal state.
    pub fn deal(&self) -> Option<&Deal> {
        self.deal.as_ref()
    }

    /// The game roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The players in the current deal.
    pub fn players(&self) -> &[Player] {
        self.deal.as_ref().map(Deal::players).unwrap_or_default()
    }

    /// The community cards.
    pub fn community_cards(&self) -> &[Card] {
        self.deal.as_ref().map(Deal::board).unwrap_or_default()
    }

    /// The winning hand once the river has been dealt.
    pub fn winning_hand(&self) -> Option<&Hand> {
        self.deal.as_ref().and_then(Deal::winning_hand)
    }

    /// Checks if a player won the deal.
    pub fn is_winner(&self, player: &Player) -> bool {
        self.deal.as_ref().is_some_and(|d| d.is_winner(player))
    }

    /// The players who won the deal.
    pub fn winners(&self) -> Vec<&Player> {
        self.deal.as_ref().map(Deal::winners).unwrap_or_default()
    }

    /// The deal result once the river has been dealt.
    pub fn result(&self) -> Option<DealResult> {
        self.deal.as_ref().and_then(Deal::result)
    }
}
