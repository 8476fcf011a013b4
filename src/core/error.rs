//! Crate-wide error type.
//!
//! Invalid configuration and precondition violations fail loudly with the
//! offending player, card, or kind in the message. Incomplete user input
//! (not enough named drafts yet) is surfaced through predicates like
//! `Session::can_start`, not through errors.

use thiserror::Error;

use crate::cards::CardKind;
use crate::core::ids::CardId;
use crate::core::player::PlayerId;
use crate::session::Phase;

/// Errors produced by session and round operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Quota lookup for a roster size outside 2-5.
    #[error("unsupported player count {0}, the game needs 2-5 players")]
    UnsupportedPlayerCount(usize),

    /// Start was forced with fewer than two named candidates.
    #[error("need at least 2 named players to start, got {0}")]
    NotEnoughNamedPlayers(usize),

    /// Operation invoked in the wrong session phase.
    #[error("session is in the {actual} phase, operation requires {expected}")]
    PhaseMismatch { expected: Phase, actual: Phase },

    /// No player with this id in the roster.
    #[error("{0} is not in the roster")]
    UnknownPlayer(PlayerId),

    /// Add attempted on a hand that already reached the quota.
    #[error("{player} already holds the full quota of {quota} cards")]
    QuotaReached { player: PlayerId, quota: usize },

    /// Focus requested for a card outside this player's hand.
    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },

    /// Edit requested for a card other than the focused one.
    #[error("{card} is not {player}'s focused card")]
    CardNotFocused { player: PlayerId, card: CardId },

    /// Edit requested while no card is focused.
    #[error("{0} has no focused card")]
    NoFocusedCard(PlayerId),

    /// The focused id no longer resolves to a card. Cards are never
    /// removed in this scope, so this is an invariant violation.
    #[error("focused {card} vanished from {player}'s hand")]
    FocusedCardMissing { player: PlayerId, card: CardId },

    /// Wasabi toggled on a card kind that has no wasabi flag.
    #[error("cannot flip wasabi on a {0} card")]
    WasabiOnNonNigiri(CardKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = GameError::QuotaReached {
            player: PlayerId::new(1),
            quota: 10,
        };
        assert_eq!(
            format!("{}", err),
            "Player 1 already holds the full quota of 10 cards"
        );

        let err = GameError::WasabiOnNonNigiri(CardKind::Tempura);
        assert_eq!(format!("{}", err), "cannot flip wasabi on a tempura card");
    }

    #[test]
    fn test_phase_mismatch_message() {
        let err = GameError::PhaseMismatch {
            expected: Phase::Setup,
            actual: Phase::Rounds,
        };
        assert_eq!(
            format!("{}", err),
            "session is in the rounds phase, operation requires setup"
        );
    }
}
