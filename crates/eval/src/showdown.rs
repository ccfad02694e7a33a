// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winning hands calculation.
use log::debug;
use thiserror::Error;

use crate::hand::Hand;

/// Evaluation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// There are no hands to pick a winner from.
    #[error("No hands to pick a winner from")]
    NoWinner,
}

/// Returns the positions of the winning hands in `hands`.
///
/// Hands are ranked by category first, hands that share the best category are
/// compared key card by key card keeping at each position only the hands with
/// the highest rank. When more than one hand is left after the last key card
/// the pot is split and all of them are returned, in input order.
pub fn winning_hands(hands: &[Hand]) -> Result<Vec<usize>, EvalError> {
    let mut ranked = (0..hands.len()).collect::<Vec<_>>();
    ranked.sort_by(|&a, &b| hands[b].cmp(&hands[a]));

    let best = *ranked.first().ok_or(EvalError::NoWinner)?;
    let category = hands[best].category();

    let mut tied = ranked
        .into_iter()
        .filter(|&idx| hands[idx].category() == category)
        .collect::<Vec<_>>();

    let key_len = tied.iter().map(|&idx| hands[idx].cards().len()).max().unwrap_or(0);
    for pos in 0..key_len {
        if tied.len() == 1 {
            break;
        }

        let highest = tied.iter().map(|&idx| hands[idx].rank_at(pos)).max().flatten();
        tied.retain(|&idx| hands[idx].rank_at(pos) == highest);
    }

    tied.sort_unstable();

    if tied.len() > 1 {
        debug!("Split pot between {} hands with {}", tied.len(), hands[best]);
    }

    Ok(tied)
}
