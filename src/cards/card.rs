//! Card instances.
//!
//! A `Card` pairs an immutable id with a kind-determined payload:
//! nigiri kinds carry a wasabi flag, the maki roll carries an amount,
//! everything else carries nothing. The payload lives on the variant, so
//! an instance can never mix payload fields across kinds.

use serde::{Deserialize, Serialize};

use super::kind::{CardKind, NigiriKind};
use crate::core::ids::CardId;

/// Kind-specific card payload.
///
/// Match on this wherever payload is read; the compiler keeps the match
/// exhaustive when kinds grow payloads.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBody {
    /// One of the three nigiri sub-kinds, with its wasabi flag.
    Nigiri { kind: NigiriKind, wasabi: bool },
    /// A maki roll and how many rolls are on the card.
    MakiRoll { amount: u32 },
    /// Any kind with no extra data.
    Plain { kind: CardKind },
}

/// A card in a player's hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    body: CardBody,
}

impl Card {
    /// Construct a card of the given kind with kind-appropriate defaults:
    /// wasabi off for nigiri, amount zero for maki, no payload otherwise.
    #[must_use]
    pub fn new(kind: CardKind, id: CardId) -> Self {
        let body = match kind {
            CardKind::SquidNigiri => CardBody::Nigiri {
                kind: NigiriKind::Squid,
                wasabi: false,
            },
            CardKind::EggNigiri => CardBody::Nigiri {
                kind: NigiriKind::Egg,
                wasabi: false,
            },
            CardKind::SalmonNigiri => CardBody::Nigiri {
                kind: NigiriKind::Salmon,
                wasabi: false,
            },
            CardKind::MakiRoll => CardBody::MakiRoll { amount: 0 },
            plain => CardBody::Plain { kind: plain },
        };
        Self { id, body }
    }

    /// The card's id, fixed at creation.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// The card's kind.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match &self.body {
            CardBody::Nigiri { kind, .. } => kind.kind(),
            CardBody::MakiRoll { .. } => CardKind::MakiRoll,
            CardBody::Plain { kind } => *kind,
        }
    }

    /// The kind-specific payload, for exhaustive matching.
    #[must_use]
    pub const fn body(&self) -> &CardBody {
        &self.body
    }

    /// Check if this card is a nigiri and so carries a wasabi flag.
    #[must_use]
    pub const fn is_nigiri(&self) -> bool {
        matches!(self.body, CardBody::Nigiri { .. })
    }

    /// The wasabi flag, `None` for non-nigiri cards.
    #[must_use]
    pub const fn wasabi(&self) -> Option<bool> {
        match self.body {
            CardBody::Nigiri { wasabi, .. } => Some(wasabi),
            _ => None,
        }
    }

    /// The maki roll amount, `None` for other kinds.
    #[must_use]
    pub const fn maki_amount(&self) -> Option<u32> {
        match self.body {
            CardBody::MakiRoll { amount } => Some(amount),
            _ => None,
        }
    }

    /// Flip the wasabi flag in place, returning the new value.
    ///
    /// `None` on a non-nigiri card; callers treat that as a precondition
    /// violation.
    pub fn flip_wasabi(&mut self) -> Option<bool> {
        match &mut self.body {
            CardBody::Nigiri { wasabi, .. } => {
                *wasabi = !*wasabi;
                Some(*wasabi)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::CardIdGen;

    fn card(kind: CardKind) -> Card {
        Card::new(kind, CardIdGen::with_seed(0).next_id())
    }

    #[test]
    fn test_new_preserves_kind() {
        for kind in CardKind::ALL {
            assert_eq!(card(kind).kind(), kind);
        }
    }

    #[test]
    fn test_payload_shape_follows_kind() {
        for kind in CardKind::ALL {
            let card = card(kind);
            if kind.is_nigiri() {
                assert_eq!(card.wasabi(), Some(false));
                assert_eq!(card.maki_amount(), None);
            } else if kind == CardKind::MakiRoll {
                assert_eq!(card.wasabi(), None);
                assert_eq!(card.maki_amount(), Some(0));
            } else {
                assert_eq!(card.wasabi(), None);
                assert_eq!(card.maki_amount(), None);
            }
        }
    }

    #[test]
    fn test_is_nigiri_matches_kind() {
        for kind in CardKind::ALL {
            assert_eq!(card(kind).is_nigiri(), kind.is_nigiri());
        }
    }

    #[test]
    fn test_flip_wasabi_on_nigiri() {
        let mut card = card(CardKind::SalmonNigiri);
        let id = card.id();

        assert_eq!(card.flip_wasabi(), Some(true));
        assert_eq!(card.wasabi(), Some(true));

        assert_eq!(card.flip_wasabi(), Some(false));
        assert_eq!(card.wasabi(), Some(false));

        // Id and kind untouched by the flips
        assert_eq!(card.id(), id);
        assert_eq!(card.kind(), CardKind::SalmonNigiri);
    }

    #[test]
    fn test_flip_wasabi_rejected_on_non_nigiri() {
        let mut pudding = card(CardKind::Pudding);
        assert_eq!(pudding.flip_wasabi(), None);

        let mut maki = card(CardKind::MakiRoll);
        assert_eq!(maki.flip_wasabi(), None);
        assert_eq!(maki.maki_amount(), Some(0));
    }

    #[test]
    fn test_serialization() {
        let mut card = card(CardKind::EggNigiri);
        card.flip_wasabi();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
