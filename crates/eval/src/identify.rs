// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand identification.
//!
//! The identifier sorts the player cards and the community cards by descending
//! rank and tries each category from the strongest down, so that the first
//! match is the best hand that can be made out of the cards.
use ahash::AHashMap;

use showdown_cards::{Card, Rank, Suit};

use crate::hand::{Hand, HandCategory};

/// Number of cards in a complete hand.
const HAND_SIZE: usize = 5;

impl Hand {
    /// Identifies the best hand for the given hole and community cards.
    ///
    /// With no community cards the hand is a partial pre-flop evaluation of the
    /// hole cards only: a pocket pair or the high card.
    pub fn identify(hole: &[Card], community: &[Card]) -> Hand {
        if community.is_empty() {
            return preflop(hole);
        }

        let mut cards = hole.iter().chain(community).copied().collect::<Vec<_>>();
        cards.sort_unstable_by(|a, b| b.cmp(a));

        let groups = cards.chunk_by(|a, b| a.rank() == b.rank()).collect::<Vec<_>>();

        straight_flush(&cards)
            .or_else(|| four_of_a_kind(&cards, &groups))
            .or_else(|| full_house(&groups))
            .or_else(|| flush(&cards))
            .or_else(|| straight(&cards))
            .or_else(|| three_of_a_kind(&cards, &groups))
            .or_else(|| two_pair(&cards, &groups))
            .or_else(|| one_pair(&cards, &groups))
            .unwrap_or_else(|| high_card(&cards))
    }
}

fn preflop(hole: &[Card]) -> Hand {
    let mut cards = hole.to_vec();
    cards.sort_unstable_by(|a, b| b.cmp(a));

    let is_pair = cards.len() > 1 && cards.iter().all(|c| c.rank() == cards[0].rank());
    if is_pair {
        Hand::new(HandCategory::OnePair, cards)
    } else {
        Hand::new(HandCategory::HighCard, cards)
    }
}

/// Groups the sorted cards by suit and returns the flush suit cards.
///
/// If more than one suit has enough cards for a flush the one with the highest
/// card wins.
fn flush_cards(cards: &[Card]) -> Option<Vec<Card>> {
    let mut suits: AHashMap<Suit, Vec<Card>> = AHashMap::with_capacity(4);
    for card in cards {
        suits.entry(card.suit()).or_default().push(*card);
    }

    suits
        .into_values()
        .filter(|s| s.len() >= HAND_SIZE)
        .max_by_key(|s| s[0])
}

/// Finds the highest five consecutive ranks in the sorted cards.
///
/// Returns one card for each rank starting with the highest, for an ace low
/// straight the ace is the last card.
fn straight_run(cards: &[Card]) -> Option<Vec<Card>> {
    let mut distinct = cards.to_vec();
    distinct.dedup_by_key(|c| c.rank());

    let run = distinct
        .windows(HAND_SIZE)
        .find(|w| w[0].rank().value() - w[HAND_SIZE - 1].rank().value() == 4);
    if let Some(run) = run {
        return Some(run.to_vec());
    }

    // The wheel.
    let find = |rank: Rank| distinct.iter().find(|c| c.rank() == rank).copied();
    [Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace]
        .into_iter()
        .map(find)
        .collect()
}

fn straight_flush(cards: &[Card]) -> Option<Hand> {
    let run = straight_run(&flush_cards(cards)?)?;
    if run[0].rank() == Rank::Ace {
        Some(Hand::new(HandCategory::RoyalFlush, run))
    } else {
        Some(Hand::new(HandCategory::StraightFlush, run))
    }
}

fn flush(cards: &[Card]) -> Option<Hand> {
    let mut suited = flush_cards(cards)?;
    suited.truncate(HAND_SIZE);
    Some(Hand::new(HandCategory::Flush, suited))
}

fn straight(cards: &[Card]) -> Option<Hand> {
    straight_run(cards).map(|run| Hand::new(HandCategory::Straight, run))
}

fn four_of_a_kind(cards: &[Card], groups: &[&[Card]]) -> Option<Hand> {
    let quads = groups.iter().find(|g| g.len() == 4)?;
    Some(with_kickers(HandCategory::FourOfAKind, quads, &[], cards))
}

fn full_house(groups: &[&[Card]]) -> Option<Hand> {
    let trips = groups.iter().find(|g| g.len() == 3)?;
    let pair = groups
        .iter()
        .find(|g| g.len() >= 2 && g[0].rank() != trips[0].rank())?;

    let mut key = trips.to_vec();
    key.extend_from_slice(&pair[..2]);
    Some(Hand::new(HandCategory::FullHouse, key))
}

fn three_of_a_kind(cards: &[Card], groups: &[&[Card]]) -> Option<Hand> {
    let trips = groups.iter().find(|g| g.len() == 3)?;
    Some(with_kickers(HandCategory::ThreeOfAKind, trips, &[], cards))
}

fn two_pair(cards: &[Card], groups: &[&[Card]]) -> Option<Hand> {
    let mut pairs = groups.iter().filter(|g| g.len() == 2);
    let (high, low) = (pairs.next()?, pairs.next()?);
    Some(with_kickers(HandCategory::TwoPair, high, low, cards))
}

fn one_pair(cards: &[Card], groups: &[&[Card]]) -> Option<Hand> {
    let pair = groups.iter().find(|g| g.len() == 2)?;
    Some(with_kickers(HandCategory::OnePair, pair, &[], cards))
}

fn high_card(cards: &[Card]) -> Hand {
    Hand::new(HandCategory::HighCard, cards.iter().take(HAND_SIZE).copied().collect())
}

/// Builds a hand key with the primary cards followed by the highest remaining
/// cards up to the hand size.
fn with_kickers(category: HandCategory, first: &[Card], second: &[Card], cards: &[Card]) -> Hand {
    let mut key = first.to_vec();
    key.extend_from_slice(second);

    let kickers = cards
        .iter()
        .filter(|c| !key.contains(c))
        .take(HAND_SIZE.saturating_sub(key.len()))
        .copied()
        .collect::<Vec<_>>();
    key.extend(kickers);

    Hand::new(category, key)
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use showdown_cards::{Deck, parse_cards};

    use super::*;

    fn identify(hole: &str, community: &str) -> Hand {
        Hand::identify(&parse_cards(hole).unwrap(), &parse_cards(community).unwrap())
    }

    fn key(hand: &Hand) -> String {
        hand.cards()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn key_ranks(hand: &Hand) -> Vec<Rank> {
        hand.ranks().collect()
    }

    #[test]
    fn preflop_hands() {
        let h = identify("7D 7S", "");
        assert_eq!(h.category(), HandCategory::OnePair);
        assert_eq!(h.cards().len(), 2);

        let h = identify("4C KH", "");
        assert_eq!(h.category(), HandCategory::HighCard);
        assert_eq!(key(&h), "KH 4C");
        assert_eq!(h.to_string(), "High Card (King)");
    }

    #[test]
    fn royal_flush() {
        let h = identify("AS KS", "QS JS TS 2D 3C");
        assert_eq!(h.category(), HandCategory::RoyalFlush);
        assert_eq!(key(&h), "AS KS QS JS TS");
        assert!(h.to_string().contains("Spades"));

        // Extra suited cards below the ten.
        let h = identify("9H AH", "QH JH TH KH 2C");
        assert_eq!(h.category(), HandCategory::RoyalFlush);
        assert_eq!(key(&h), "AH KH QH JH TH");
    }

    #[test]
    fn straight_flush() {
        let h = identify("9C 8C", "7C 6C 5C 4C AD");
        assert_eq!(h.category(), HandCategory::StraightFlush);
        assert_eq!(key(&h), "9C 8C 7C 6C 5C");

        // Steel wheel.
        let h = identify("AD 2D", "3D 4D 5D KS KC");
        assert_eq!(h.category(), HandCategory::StraightFlush);
        assert_eq!(key(&h), "5D 4D 3D 2D AD");

        // A straight and a flush that do not make a straight flush.
        let h = identify("9H 8C", "7H 6H 5H 2H AS");
        assert_eq!(h.category(), HandCategory::Flush);
        assert_eq!(key(&h), "9H 7H 6H 5H 2H");
    }

    #[test]
    fn four_of_a_kind() {
        let h = identify("KS KD", "KH KC 2S 9D 3H");
        assert_eq!(h.category(), HandCategory::FourOfAKind);
        assert_eq!(key(&h), "KS KH KD KC 9D");

        // The kicker comes from the board.
        let h = identify("2C 2D", "2H 2S 5H 8H JH");
        assert_eq!(h.category(), HandCategory::FourOfAKind);
        assert_eq!(h.rank_at(4), Some(Rank::Jack));
    }

    #[test]
    fn full_house() {
        let h = identify("KS KD", "KH 2C 2S 9D 3H");
        assert_eq!(h.category(), HandCategory::FullHouse);
        assert_eq!(key_ranks(&h), [Rank::King, Rank::King, Rank::King, Rank::Deuce, Rank::Deuce]);

        // Two triples, the highest makes the full house.
        let h = identify("5S 5D", "5H QC QS QD 3H");
        assert_eq!(h.category(), HandCategory::FullHouse);
        assert_eq!(key_ranks(&h), [Rank::Queen, Rank::Queen, Rank::Queen, Rank::Five, Rank::Five]);

        // The highest of two pairs.
        let h = identify("7S 7D", "7H 3C 3S AD AH");
        assert_eq!(key_ranks(&h), [Rank::Seven, Rank::Seven, Rank::Seven, Rank::Ace, Rank::Ace]);
    }

    #[test]
    fn flush() {
        let h = identify("AD 3D", "JD 9D 6D 2D KS");
        assert_eq!(h.category(), HandCategory::Flush);
        assert_eq!(key(&h), "AD JD 9D 6D 3D");
        assert_eq!(h.to_string(), "Flush (Diamonds)");
    }

    #[test]
    fn flush_suit_with_highest_card() {
        // Ten cards with five hearts and five spades.
        let h = identify("2S AH", "KS QH 9H 5H 2H JS 8S 4S");
        assert_eq!(h.category(), HandCategory::Flush);
        assert_eq!(key(&h), "AH QH 9H 5H 2H");

        let h = identify("4S 8S", "JS 2H 5H 9H QH KS AH 2S");
        assert_eq!(key(&h), "AH QH 9H 5H 2H");

        // Same ranks with the suits swapped.
        let h = identify("2H AS", "KH QS 9S 5S 2S JH 8H 4H");
        assert_eq!(key(&h), "AS QS 9S 5S 2S");
        assert_eq!(h.to_string(), "Flush (Spades)");

        let h = identify("4H 8H", "JH 2S 5S 9S QS KH AS 2H");
        assert_eq!(key(&h), "AS QS 9S 5S 2S");
    }

    #[test]
    fn straight() {
        let h = identify("AD 2C", "3S 4H 5D 9C KC");
        assert_eq!(h.category(), HandCategory::Straight);
        assert_eq!(key_ranks(&h), [Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace]);

        // Paired straight, the pair must not shadow the straight.
        let h = identify("8D 8C", "9S TH JD QC 2C");
        assert_eq!(h.category(), HandCategory::Straight);
        assert_eq!(key_ranks(&h), [Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine, Rank::Eight]);

        // The highest run wins over the wheel.
        let h = identify("AD 2C", "3S 4H 5D 6C KC");
        assert_eq!(h.rank_at(0), Some(Rank::Six));

        // Broadway.
        let h = identify("AD KC", "QS JH TD 3C 3H");
        assert_eq!(h.category(), HandCategory::Straight);
        assert_eq!(h.to_string(), "Straight (Ace high)");

        // No wrap around.
        let h = identify("QD KC", "AS 2H 3D 7C 8H");
        assert_eq!(h.category(), HandCategory::HighCard);
    }

    #[test]
    fn three_of_a_kind() {
        let h = identify("7S 7D", "7H KC 2S 9D 3H");
        assert_eq!(h.category(), HandCategory::ThreeOfAKind);
        assert_eq!(key_ranks(&h), [Rank::Seven, Rank::Seven, Rank::Seven, Rank::King, Rank::Nine]);
    }

    #[test]
    fn two_pair() {
        let h = identify("JS 4D", "JH 4C AS 9D 3H");
        assert_eq!(h.category(), HandCategory::TwoPair);
        assert_eq!(key_ranks(&h), [Rank::Jack, Rank::Jack, Rank::Four, Rank::Four, Rank::Ace]);

        // Three pairs, the third pair can be the kicker.
        let h = identify("JS 4D", "JH 4C 9S 9D 3H");
        assert_eq!(key_ranks(&h), [Rank::Jack, Rank::Jack, Rank::Nine, Rank::Nine, Rank::Four]);
    }

    #[test]
    fn one_pair() {
        let h = identify("AC 3D", "JS JD 7H 4C 2S");
        assert_eq!(h.category(), HandCategory::OnePair);
        assert_eq!(key_ranks(&h), [Rank::Jack, Rank::Jack, Rank::Ace, Rank::Seven, Rank::Four]);
    }

    #[test]
    fn high_card() {
        let h = identify("AC 3D", "JS TD 7H 4C 2S");
        assert_eq!(h.category(), HandCategory::HighCard);
        assert_eq!(key_ranks(&h), [Rank::Ace, Rank::Jack, Rank::Ten, Rank::Seven, Rank::Four]);
    }

    #[test]
    fn flop_and_turn_hands() {
        // Five cards on the flop.
        let h = identify("AC AD", "AS 2C 3D");
        assert_eq!(h.category(), HandCategory::ThreeOfAKind);
        assert_eq!(h.cards().len(), 5);

        // Six cards on the turn.
        let h = identify("6C 7D", "8S 9C TD 2H");
        assert_eq!(h.category(), HandCategory::Straight);
        assert_eq!(h.rank_at(0), Some(Rank::Ten));
    }

    #[test]
    fn identify_is_order_independent() {
        let mut rng = StdRng::seed_from_u64(42);

        Deck::default().sample(&mut rng.clone(), 2_000, 7, |cards| {
            let hand = Hand::identify(&cards[..2], &cards[2..]);
            assert_eq!(hand.cards().len(), 5);

            let mut shuffled = cards.to_vec();
            shuffled.shuffle(&mut rng);
            let other = Hand::identify(&shuffled[..2], &shuffled[2..]);

            assert_eq!(hand.category(), other.category());
            assert_eq!(key_ranks(&hand), key_ranks(&other));

            // Same input same hand.
            let again = Hand::identify(&cards[..2], &cards[2..]);
            assert_eq!(key(&hand), key(&again));
        });
    }
}
