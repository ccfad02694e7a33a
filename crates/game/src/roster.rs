// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players roster types.
use ahash::AHashSet;

use crate::GameError;

/// Checks if a player is allowed to play.
pub trait Registry {
    /// Returns true if the player with the given name is registered.
    fn is_registered(&self, name: &str) -> bool;
}

/// A registry that accepts any player.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenRegistry;

impl Registry for OpenRegistry {
    fn is_registered(&self, _name: &str) -> bool {
        true
    }
}

impl Registry for AHashSet<String> {
    fn is_registered(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<F> Registry for F
where
    F: Fn(&str) -> bool,
{
    fn is_registered(&self, name: &str) -> bool {
        self(name)
    }
}

/// The names of the players in a deal, in seating order.
///
/// A roster has at least one player, names are not blank and are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Creates a roster accepting any player name.
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_registry(names, &OpenRegistry)
    }

    /// Creates a roster where each player must be in the registry.
    pub fn with_registry<I, S, R>(names: I, registry: &R) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Registry + ?Sized,
    {
        let names = names
            .into_iter()
            .map(Into::<String>::into)
            .map(|n| n.trim().to_string())
            .collect::<Vec<_>>();

        if names.is_empty() {
            return Err(GameError::Validation("no players".to_string()));
        }

        if names.iter().any(|n| n.is_empty()) {
            return Err(GameError::Validation("blank player name".to_string()));
        }

        let mut seen = AHashSet::with_capacity(names.len());
        if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(GameError::Validation(format!("duplicate player {dup}")));
        }

        let unregistered = names
            .iter()
            .filter(|n| !registry.is_registered(n))
            .map(String::as_str)
            .collect::<Vec<_>>();
        if !unregistered.is_empty() {
            return Err(GameError::Validation(format!(
                "unregistered players: {}",
                unregistered.join(", ")
            )));
        }

        Ok(Self { names })
    }

    /// The players names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The number of players.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// A roster is never empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_roster() {
        let roster = Roster::new(["Dadan", " Haze ", "Joanny"]).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.names().collect::<Vec<_>>(), ["Dadan", "Haze", "Joanny"]);
    }

    #[test]
    fn invalid_roster() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Roster::new(empty),
            Err(GameError::Validation("no players".to_string()))
        );

        assert_eq!(
            Roster::new(["Dadan", "  "]),
            Err(GameError::Validation("blank player name".to_string()))
        );

        assert_eq!(
            Roster::new(["Dadan", "Haze", "Dadan"]),
            Err(GameError::Validation("duplicate player Dadan".to_string()))
        );
    }

    #[test]
    fn registered_players() {
        let registry = ["Chance", "AliceGuo"]
            .into_iter()
            .map(String::from)
            .collect::<AHashSet<_>>();

        assert!(Roster::with_registry(["Chance", "AliceGuo"], &registry).is_ok());
        assert_eq!(
            Roster::with_registry(["Chance", "Migs", "Jude"], &registry),
            Err(GameError::Validation(
                "unregistered players: Migs, Jude".to_string()
            ))
        );

        let only_short = |name: &str| name.len() <= 4;
        assert!(Roster::with_registry(["Migs", "Jude"], &only_short).is_ok());
        assert!(Roster::with_registry(["Robyn"], &only_short).is_err());
    }
}
