//! Card system: kinds and the tagged-variant card model.
//!
//! ## Key Types
//!
//! - `CardKind`: The full enumeration of card kinds
//! - `NigiriKind`: The three nigiri sub-kinds, the only kinds with a
//!   wasabi flag
//! - `Card` / `CardBody`: A card instance; the payload shape is fully
//!   determined by the kind

pub mod card;
pub mod kind;

pub use card::{Card, CardBody};
pub use kind::{CardKind, NigiriKind};
