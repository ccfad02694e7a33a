// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deal player types.
use showdown_cards::Card;
use showdown_eval::Hand;

/// A player in a deal.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hole_cards: Vec<Card>,
    hand: Option<Hand>,
}

impl Player {
    /// Creates a new player with no cards.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hole_cards: Vec::with_capacity(2),
            hand: None,
        }
    }

    /// This player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This player private cards.
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole_cards
    }

    /// This player best hand with the cards dealt so far.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Gives a hole card to this player.
    pub(crate) fn deal(&mut self, card: Card) {
        self.hole_cards.push(card);
    }

    /// Reclassifies this player hand with the given community cards.
    pub(crate) fn update_hand(&mut self, board: &[Card]) {
        self.hand = Some(Hand::identify(&self.hole_cards, board));
    }
}
