//! Round state: per-player card collection and the single-focus edit flow.
//!
//! Each player in the Rounds phase is backed by a `PlayerView`: the
//! player's cells, the shared card quota, a `ready` derivation, and the
//! view's focus slot. At most one card per view is focused (open for
//! attribute edits) at a time; adding a card focuses it immediately so the
//! follow-up edit lands on the right card.

use im::Vector;

use crate::cards::{Card, CardKind};
use crate::core::error::GameError;
use crate::core::ids::{CardId, CardIdGen};
use crate::core::player::{Player, PlayerId};
use crate::reactive::{Cell, Computed, Reactive};

/// Cards each player must collect in a round, determined solely by the
/// player count.
///
/// ```
/// use sushi_tally::round::cards_per_player;
///
/// assert_eq!(cards_per_player(2).unwrap(), 10);
/// assert_eq!(cards_per_player(5).unwrap(), 7);
/// assert!(cards_per_player(6).is_err());
/// ```
pub fn cards_per_player(player_count: usize) -> Result<usize, GameError> {
    match player_count {
        2 => Ok(10),
        3 => Ok(9),
        4 => Ok(8),
        5 => Ok(7),
        n => Err(GameError::UnsupportedPlayerCount(n)),
    }
}

/// Find the focused card in a hand.
///
/// `None` focus yields `None`. An id that is not in the hand also yields
/// `None`; whether that is a valid transient state or an invariant
/// violation is the caller's call.
#[must_use]
pub fn lookup_focused(cards: &Vector<Card>, focus: Option<CardId>) -> Option<&Card> {
    let id = focus?;
    cards.iter().find(|card| card.id() == id)
}

/// A player's round state: hand, focus slot, quota, and readiness.
#[derive(Clone, Debug)]
pub struct PlayerView {
    id: PlayerId,
    name: Cell<String>,
    cards: Cell<Vector<Card>>,
    focus: Cell<Option<CardId>>,
    quota: usize,
    ready: Computed<bool>,
}

impl PlayerView {
    pub(crate) fn new(id: PlayerId, player: Player, quota: usize) -> Self {
        let cells = player.into_cells();
        let hand = cells.cards.clone();
        let ready = Computed::new(move || hand.with(|cards| cards.len()) == quota);
        Self {
            id,
            name: cells.name,
            cards: cells.cards,
            focus: Cell::new(None),
            quota,
            ready,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.name.get()
    }

    /// Snapshot of the hand, insertion order preserved.
    #[must_use]
    pub fn cards(&self) -> Vector<Card> {
        self.cards.get()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.with(|hand| hand.len())
    }

    #[must_use]
    pub fn quota(&self) -> usize {
        self.quota
    }

    /// The currently focused card id, if any.
    #[must_use]
    pub fn focus(&self) -> Option<CardId> {
        self.focus.get()
    }

    /// True once the hand has reached the quota.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// True while another card may still be added. Callers gate the add
    /// action on this instead of attempting an over-quota add.
    #[must_use]
    pub fn can_add_card(&self) -> bool {
        self.card_count() < self.quota
    }

    pub(crate) fn cards_cell(&self) -> &Cell<Vector<Card>> {
        &self.cards
    }

    /// Construct a card of `kind`, append it, and focus it.
    ///
    /// Fails with `QuotaReached` once the hand is full; no card is created
    /// and the hand is left untouched.
    pub fn add_card(&mut self, kind: CardKind, ids: &mut CardIdGen) -> Result<CardId, GameError> {
        if !self.can_add_card() {
            return Err(GameError::QuotaReached {
                player: self.id,
                quota: self.quota,
            });
        }

        let card = Card::new(kind, ids.next_id());
        let id = card.id();
        self.cards.update(|hand| hand.push_back(card));
        self.focus.set(Some(id));
        Ok(id)
    }

    /// Change which card is open for edits, or close the editor with
    /// `None`. Focusing an id outside this player's hand is a usage error.
    pub fn set_focus(&mut self, focus: Option<CardId>) -> Result<(), GameError> {
        if let Some(card) = focus {
            let in_hand = self.cards.with(|hand| lookup_focused(hand, Some(card)).is_some());
            if !in_hand {
                return Err(GameError::CardNotInHand {
                    player: self.id,
                    card,
                });
            }
        }
        self.focus.set(focus);
        Ok(())
    }

    /// The focused card, `Ok(None)` when nothing is focused.
    ///
    /// Cards are never removed in this scope, so a focus id that fails to
    /// resolve is an invariant violation, not a lookup miss.
    pub fn focused_card(&self) -> Result<Option<Card>, GameError> {
        let Some(id) = self.focus.get() else {
            return Ok(None);
        };
        self.cards
            .with(|hand| lookup_focused(hand, Some(id)).cloned())
            .map(Some)
            .ok_or(GameError::FocusedCardMissing {
                player: self.id,
                card: id,
            })
    }

    /// Flip the wasabi flag of the focused card, which must be `card`.
    ///
    /// Only the flag changes: same id, same kind, same position in the
    /// hand. Fails fast when `card` is not the focused card or the focused
    /// card is not a nigiri.
    pub fn toggle_wasabi(&mut self, card: CardId) -> Result<bool, GameError> {
        match self.focus.get() {
            None => {
                return Err(GameError::NoFocusedCard(self.id));
            }
            Some(focused) if focused != card => {
                return Err(GameError::CardNotFocused {
                    player: self.id,
                    card,
                });
            }
            Some(_) => {}
        }

        let kind = self
            .cards
            .with(|hand| lookup_focused(hand, Some(card)).map(Card::kind))
            .ok_or(GameError::FocusedCardMissing {
                player: self.id,
                card,
            })?;
        if !kind.is_nigiri() {
            return Err(GameError::WasabiOnNonNigiri(kind));
        }

        self.cards
            .update(|hand| {
                hand.iter_mut()
                    .find(|c| c.id() == card)
                    .and_then(Card::flip_wasabi)
            })
            .ok_or(GameError::FocusedCardMissing {
                player: self.id,
                card,
            })
    }
}
