//! Core types: card ids, players, errors.
//!
//! These are the building blocks the card model, round controller, and
//! session state machine are assembled from.

pub mod error;
pub mod ids;
pub mod player;

pub use error::GameError;
pub use ids::{CardId, CardIdGen};
pub use player::{Player, PlayerCells, PlayerDraft, PlayerId};
