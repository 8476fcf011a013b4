//! # sushi-tally
//!
//! Score-tracking session core for a hand-management card game.
//!
//! Tracks a multiplayer session through roster setup, per-round card
//! collection, and a single-focus editing flow for cards that carry extra
//! attributes (wasabi on nigiri cards).
//!
//! ## Design Principles
//!
//! 1. **Tagged payloads**: A card's extra data lives on its variant.
//!    Reading the wasabi flag off a non-nigiri card is unrepresentable.
//!
//! 2. **Explicit ownership**: The session is a plain value owned by the
//!    caller. No module-level globals; card ids come from a generator the
//!    session owns.
//!
//! 3. **Single-threaded by construction**: Reactive handles are `Rc`-based
//!    and not `Send`. Every mutating operation is fully applied, derived
//!    flags included, before the next one runs.
//!
//! ## Modules
//!
//! - `core`: Card ids and the id generator, players, errors
//! - `cards`: Card kinds and the tagged-variant card model
//! - `reactive`: Fine-grained observable cells and computed values
//! - `round`: Per-player quota, card collection, and the focus edit flow
//! - `session`: Setup → Rounds → Podium phase machine

pub mod cards;
pub mod core;
pub mod reactive;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CardId, CardIdGen, GameError, Player, PlayerCells, PlayerDraft, PlayerId};

pub use crate::cards::{Card, CardBody, CardKind, NigiriKind};

pub use crate::reactive::{reactive, Cell, Computed, Reactive};

pub use crate::round::{cards_per_player, lookup_focused, PlayerView};

pub use crate::session::{can_add_draft, can_remove_draft, Phase, Session, MAX_PLAYERS, MIN_PLAYERS};
