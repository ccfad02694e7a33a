// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! and a [Deck] type for shuffling and drawing cards from the top:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::default();
//! assert_eq!(deck.draw().unwrap(), Card::new(Rank::Deuce, Suit::Clubs));
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
//!
//! to sample 10 random 7-cards hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 7, |hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardsError, Deck, Rank, Suit, parse_cards};
