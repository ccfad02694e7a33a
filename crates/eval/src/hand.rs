// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand types.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank};

/// A hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// The number of hand categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category name, i.e. "Full House".
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified poker hand.
///
/// The hand key cards list the cards that make the category first followed
/// by the kickers, each group sorted by descending rank. A hand made with
/// community cards has five key cards, a pre-flop hand has only the two hole
/// cards.
///
/// Hands are compared by category and then by the ranks of the key cards,
/// two hands are equal when they have the same strength even if the cards
/// suits differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    category: HandCategory,
    cards: Vec<Card>,
}

impl Hand {
    pub(crate) fn new(category: HandCategory, cards: Vec<Card>) -> Self {
        Self { category, cards }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand key cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The ranks of the key cards in comparison order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.cards.iter().map(|c| c.rank())
    }

    /// The rank of the key card at the given position.
    pub fn rank_at(&self, pos: usize) -> Option<Rank> {
        self.cards.get(pos).map(|c| c.rank())
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.ranks().cmp(other.ranks()))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.category.name();

        // Key positions read by the description.
        let needed = match self.category {
            HandCategory::FullHouse => 4,
            HandCategory::TwoPair => 3,
            _ => 1,
        };
        if self.cards.len() < needed {
            return f.write_str(name);
        }

        let rank = |pos: usize| self.cards[pos].rank();

        match self.category {
            HandCategory::RoyalFlush | HandCategory::Flush => {
                write!(f, "{name} ({})", self.cards[0].suit().name())
            }
            HandCategory::StraightFlush | HandCategory::Straight => {
                write!(f, "{name} ({} high)", rank(0).name())
            }
            HandCategory::FourOfAKind | HandCategory::ThreeOfAKind | HandCategory::OnePair => {
                write!(f, "{name} ({})", rank(0).plural())
            }
            HandCategory::FullHouse => {
                write!(f, "{name} ({} over {})", rank(0).plural(), rank(3).plural())
            }
            HandCategory::TwoPair => {
                write!(f, "{name} ({} and {})", rank(0).plural(), rank(2).plural())
            }
            HandCategory::HighCard => write!(f, "{name} ({})", rank(0).name()),
        }
    }
}
