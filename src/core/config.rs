//! Match configuration types.
//!
//! - `Variant`: which built-in game is played (pile layout, turn limit)
//! - `Opener`: who makes the first move
//! - `GameConfig`: combines the above with the two participants
//!
//! Everything here is plain data and serializable, so a driver can keep
//! its presets in a file.

use serde::{Deserialize, Serialize};

use super::piles::Piles;
use super::player::{Participant, PlayerId, PlayerMap};
use super::rng::GameRng;

/// Matches on the table at the start of simple Nim.
pub const SIMPLE_NIM_MATCHES: u32 = 21;

/// Most matches a player may take per turn in simple Nim.
pub const SIMPLE_NIM_TURN_LIMIT: u32 = 4;

/// Pile layout of Marienbad.
pub const MARIENBAD_PILES: [u32; 4] = [1, 3, 5, 7];

/// The built-in games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// One pile of 21 matches, 1 to 4 per turn.
    SimpleNim,
    /// Four piles of 1, 3, 5 and 7, any amount from one pile per turn.
    Marienbad,
}

impl Variant {
    /// The pile layout a new game starts from.
    #[must_use]
    pub fn initial_piles(self) -> Piles {
        match self {
            Variant::SimpleNim => Piles::new(&[SIMPLE_NIM_MATCHES]),
            Variant::Marienbad => Piles::new(&MARIENBAD_PILES),
        }
    }

    /// Per-turn cap on matches taken, if the variant has one.
    #[must_use]
    pub fn turn_limit(self) -> Option<u32> {
        match self {
            Variant::SimpleNim => Some(SIMPLE_NIM_TURN_LIMIT),
            Variant::Marienbad => None,
        }
    }

    /// Human-readable name (for debugging/display).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::SimpleNim => "Nim",
            Variant::Marienbad => "Marienbad",
        }
    }
}

/// Who moves first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opener {
    /// A fixed seat.
    Player(PlayerId),
    /// Decided by a seeded coin toss.
    #[default]
    CoinToss,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Which game is played.
    pub variant: Variant,

    /// The two participants, seat 0 then seat 1.
    pub players: PlayerMap<Participant>,

    /// Who makes the first move.
    pub opener: Opener,

    /// Seed for the coin toss. Same seed, same opener.
    pub seed: u64,
}

impl GameConfig {
    /// Create a configuration for two participants.
    ///
    /// Defaults to a coin toss with seed 42.
    pub fn new(variant: Variant, first: Participant, second: Participant) -> Self {
        Self {
            variant,
            players: PlayerMap::from_pair(first, second),
            opener: Opener::default(),
            seed: 42,
        }
    }

    /// Two humans.
    pub fn human_vs_human(
        variant: Variant,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::new(variant, Participant::human(first), Participant::human(second))
    }

    /// A human in seat 0 against the computer in seat 1.
    pub fn human_vs_computer(variant: Variant, human: impl Into<String>) -> Self {
        Self::new(
            variant,
            Participant::human(human),
            Participant::computer(Participant::COMPUTER_NAME),
        )
    }

    /// Set who moves first.
    #[must_use]
    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    /// Let the given seat move first.
    #[must_use]
    pub fn opened_by(self, player: PlayerId) -> Self {
        self.with_opener(Opener::Player(player))
    }

    /// Set the coin-toss seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rename the computer seat(s), e.g. to a localized name.
    #[must_use]
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        for player in PlayerId::all() {
            if self.players[player].is_computer() {
                self.players[player].name.clone_from(&name);
            }
        }
        self
    }

    /// Get a participant.
    #[must_use]
    pub fn participant(&self, player: PlayerId) -> &Participant {
        &self.players[player]
    }

    /// The seat that moves first, tossing the coin if configured to.
    #[must_use]
    pub fn resolve_opener(&self) -> PlayerId {
        match self.opener {
            Opener::Player(player) => player,
            Opener::CoinToss => {
                let mut rng = GameRng::new(self.seed);
                if rng.gen_bool(0.5) {
                    PlayerId::new(0)
                } else {
                    PlayerId::new(1)
                }
            }
        }
    }
}
