//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats of a match.
//!
//! ## Participant
//!
//! Who sits in a seat: a display name and whether a human or the
//! computer chooses the moves.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in every match.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier. The first seat is `PlayerId(0)`, the second `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent's seat.
    ///
    /// ```
    /// use rust_nim::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).other(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).other(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both seats.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who picks the moves for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Moves arrive from the driver (keyboard, script, network...).
    Human,
    /// Moves are computed by the ruleset's strategy.
    Computer,
}

/// A named participant in a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub controller: Controller,
}

impl Participant {
    /// Default display name for the computer opponent.
    pub const COMPUTER_NAME: &'static str = "Computer";

    /// A human participant.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
        }
    }

    /// A computer participant.
    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Computer,
        }
    }

    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.controller == Controller::Computer
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_nim::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::from_pair(0, 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map holding `first` for `PlayerId(0)` and `second` for `PlayerId(1)`.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: vec![first, second],
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl PlayerMap<Participant> {
    /// Look a participant up by what a person would type to name them.
    ///
    /// Matches the full name case-insensitively first, then a single
    /// initial letter if it identifies exactly one participant.
    #[must_use]
    pub fn find(&self, input: &str) -> Option<PlayerId> {
        let wanted = input.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        if let Some((id, _)) = self
            .iter()
            .find(|(_, p)| p.name.to_lowercase() == wanted)
        {
            return Some(id);
        }

        let mut chars = wanted.chars();
        let (Some(initial), None) = (chars.next(), chars.next()) else {
            return None;
        };

        let mut matches = self.iter().filter(|(_, p)| {
            p.name
                .chars()
                .next()
                .is_some_and(|c| c.to_lowercase().eq(std::iter::once(initial)))
        });

        match (matches.next(), matches.next()) {
            (Some((id, _)), None) => Some(id),
            _ => None,
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
