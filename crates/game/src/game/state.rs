// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deal state types.
use log::{debug, info};

use showdown_cards::{Card, Deck};
use showdown_eval::{Hand, winning_hands};

use crate::{
    GameError, Roster,
    result::{DealResult, PlayerResult},
};

use super::{Street, player::Player};

/// Number of private cards dealt to each player.
const HOLE_CARDS: usize = 2;

/// The state of a deal at one street.
///
/// A deal is never modified in place, each transition returns the deal state
/// for the next street so that a deal can be replayed from any point.
#[derive(Debug, Clone)]
pub struct Deal {
    street: Street,
    deck: Deck,
    players: Vec<Player>,
    board: Vec<Card>,
    winning_hand: Option<Hand>,
}

impl Deal {
    /// Starts a deal with the given deck dealing two cards to each player.
    ///
    /// Cards are dealt from the top of the deck one at a time to each player
    /// in seating order.
    pub fn start(roster: &Roster, mut deck: Deck) -> Result<Deal, GameError> {
        let mut players = roster.names().map(Player::new).collect::<Vec<_>>();

        for _ in 0..HOLE_CARDS {
            for player in players.iter_mut() {
                player.deal(deck.draw()?);
            }
        }

        let mut deal = Deal {
            street: Street::PreFlop,
            deck,
            players,
            board: Vec::with_capacity(Street::River.community_cards()),
            winning_hand: None,
        };

        deal.update_hands();
        Ok(deal)
    }

    /// Returns the deal state for the next street.
    ///
    /// A burn card is drawn before each reveal, then three cards are dealt on
    /// the flop and one card on the turn and river. The winners are set when
    /// the river is dealt, on the river this returns an identical deal.
    pub fn next(&self) -> Result<Deal, GameError> {
        let mut next = self.clone();

        let count = match self.street {
            Street::NotStarted => return Err(GameError::NotStarted),
            Street::River => return Ok(next),
            Street::PreFlop => 3,
            Street::Flop | Street::Turn => 1,
        };

        next.deck.burn()?;
        for _ in 0..count {
            next.board.push(next.deck.draw()?);
        }

        next.street = self.street.next();
        debug!("{} {}", next.street, cards_to_string(&next.board));

        next.update_hands();

        if next.street == Street::River {
            next.showdown()?;
        }

        Ok(next)
    }

    /// The deal street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The number of cards left in the deck.
    pub fn cards_left(&self) -> usize {
        self.deck.count()
    }

    /// The winning hand, set on the river.
    pub fn winning_hand(&self) -> Option<&Hand> {
        self.winning_hand.as_ref()
    }

    /// Checks if the player hand matches the winning hand.
    ///
    /// Hands are matched by category and key card ranks so all the players
    /// that split the pot are winners.
    pub fn is_winner(&self, player: &Player) -> bool {
        match (&self.winning_hand, player.hand()) {
            (Some(winning), Some(hand)) => winning == hand,
            _ => false,
        }
    }

    /// The players who won the pot, empty before the river.
    pub fn winners(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| self.is_winner(p)).collect()
    }

    /// Returns the deal result once the river has been dealt.
    pub fn result(&self) -> Option<DealResult> {
        if self.street != Street::River {
            return None;
        }

        let players = self
            .players
            .iter()
            .map(|p| PlayerResult {
                name: p.name().to_string(),
                hole_cards: p.hole_cards().to_vec(),
                hand: p.hand().map(Hand::to_string).unwrap_or_default(),
                is_winner: self.is_winner(p),
            })
            .collect::<Vec<_>>();

        let winners = players
            .iter()
            .filter(|p| p.is_winner)
            .map(|p| p.name.clone())
            .collect();

        Some(DealResult {
            board: self.board.clone(),
            players,
            winners,
        })
    }

    fn update_hands(&mut self) {
        for player in self.players.iter_mut() {
            player.update_hand(&self.board);

            if let Some(hand) = player.hand() {
                debug!("Player {} has {hand}", player.name());
            }
        }
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        let hands = self
            .players
            .iter()
            .map(|p| p.hand().cloned().ok_or(GameError::NoWinner))
            .collect::<Result<Vec<_>, _>>()?;

        let winners = winning_hands(&hands)?;
        let winning_hand = hands[winners[0]].clone();

        let names = winners
            .iter()
            .map(|&idx| self.players[idx].name())
            .collect::<Vec<_>>();
        info!(
            "Winning hand {winning_hand} {} for {}",
            cards_to_string(winning_hand.cards()),
            names.join(", ")
        );

        self.winning_hand = Some(winning_hand);
        Ok(())
    }
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
