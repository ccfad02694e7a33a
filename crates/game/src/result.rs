// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deal result types.
//!
//! These are the records handed to the callers of a deal, they can be stored
//! or sent over the wire with serde.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::Card;

/// A player result in a completed deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    /// The player name.
    pub name: String,
    /// The player hole cards.
    pub hole_cards: Vec<Card>,
    /// The player hand description, i.e. "Royal Flush (Hearts)".
    pub hand: String,
    /// The player won or split the pot.
    pub is_winner: bool,
}

/// The result of a completed deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealResult {
    /// The community cards.
    pub board: Vec<Card>,
    /// The players results in seating order.
    pub players: Vec<PlayerResult>,
    /// The winners names, more than one name for a split pot.
    pub winners: Vec<String>,
}

impl DealResult {
    /// Checks if the pot was split between more than one player.
    pub fn is_split_pot(&self) -> bool {
        self.winners.len() > 1
    }
}

impl fmt::Display for DealResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board.iter().map(Card::to_string).collect::<Vec<_>>();
        writeln!(f, "Board: {}", board.join(" "))?;

        for player in &self.players {
            let hole = player.hole_cards.iter().map(Card::to_string).collect::<Vec<_>>();
            let mark = if player.is_winner { " *" } else { "" };
            writeln!(f, "{:<12} {}  {}{mark}", player.name, hole.join(" "), player.hand)?;
        }

        if self.is_split_pot() {
            write!(f, "Split pot: {}", self.winners.join(", "))
        } else {
            write!(f, "Winner: {}", self.winners.join(", "))
        }
    }
}
