// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Identifies the best poker hand a player can make out of its two hole cards
//! and the community cards on the board, and picks the winners at showdown.
//!
//! To classify a hand use [Hand::identify], hands are totally ordered by their
//! [HandCategory] first and then by the ranks of their key cards:
//!
//! ```
//! # use showdown_eval::*;
//! let board = parse_cards("QS JS TS 2D 3C").unwrap();
//! let royal = Hand::identify(&parse_cards("AS KS").unwrap(), &board);
//! let pair = Hand::identify(&parse_cards("2H 7C").unwrap(), &board);
//!
//! assert_eq!(royal.category(), HandCategory::RoyalFlush);
//! assert_eq!(royal.to_string(), "Royal Flush (Spades)");
//! assert!(royal > pair);
//!
//! let winners = winning_hands(&[pair, royal]).unwrap();
//! assert_eq!(winners, vec![1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub use hand::{Hand, HandCategory};

mod identify;

pub mod showdown;
pub use showdown::{EvalError, winning_hands};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit, parse_cards};
