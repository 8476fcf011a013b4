//! Player identification and roster types.
//!
//! ## PlayerId
//!
//! Type-safe index into the finalized roster, assigned at the
//! Setup → Rounds transition in submission order.
//!
//! ## PlayerDraft vs Player
//!
//! A `PlayerDraft` is a setup-form slot: just a name, possibly empty.
//! A `Player` is a finalized participant with a card hand; only named
//! drafts are promoted.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::reactive::{Cell, Reactive};

/// Player identifier, 0-based roster index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use sushi_tally::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, [PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A setup-form candidate slot.
///
/// An empty name means the slot is not ready; unnamed drafts are dropped
/// when the session starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
}

impl PlayerDraft {
    /// Create a draft with a name already filled in.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create an empty slot, the state a fresh form input starts in.
    #[must_use]
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// A draft counts toward the start precondition once it has a name.
    #[must_use]
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

/// A finalized participant: a name and an ordered hand of cards.
///
/// Hands keep insertion order and are never reordered or deduplicated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub cards: Vector<Card>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vector::new(),
        }
    }
}

/// Per-field cells for a `Player`, so mutating the hand does not
/// invalidate observers of the name and vice versa.
#[derive(Clone, Debug)]
pub struct PlayerCells {
    pub name: Cell<String>,
    pub cards: Cell<Vector<Card>>,
}

impl Reactive for Player {
    type Cells = PlayerCells;

    fn into_cells(self) -> PlayerCells {
        PlayerCells {
            name: Cell::new(self.name),
            cards: Cell::new(self.cards),
        }
    }
}
