//! Session state machine: Setup → Rounds → Podium.
//!
//! The session is an explicitly owned value. All phase changes and all
//! round mutations go through it; nothing below it may change phase.
//!
//! The Setup → Rounds transition filters the draft list down to named
//! candidates, derives the per-player quota, wraps each player in fresh
//! cells with an empty hand, and only then flips the phase. The roster is
//! built in full before `self` is touched, so a failed start leaves the
//! session exactly as it was.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardKind};
use crate::core::error::GameError;
use crate::core::ids::{CardId, CardIdGen};
use crate::core::player::{Player, PlayerDraft, PlayerId};
use crate::reactive::{Cell, Computed};
use crate::round::{cards_per_player, PlayerView};

/// Fewest candidate slots a setup form presents, and the fewest named
/// players a session can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a session supports.
pub const MAX_PLAYERS: usize = 5;

/// Top-level session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting the roster.
    Setup,
    /// Per-round card collection.
    Rounds,
    /// Terminal scoring phase. Declared for the full session lifecycle;
    /// no transition out of `Rounds` is wired up yet.
    Podium,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Setup => "setup",
            Phase::Rounds => "rounds",
            Phase::Podium => "podium",
        })
    }
}

/// True while the setup form may grow another candidate slot.
#[must_use]
pub fn can_add_draft(drafts: &[PlayerDraft]) -> bool {
    drafts.len() < MAX_PLAYERS
}

/// True while the setup form may drop its last candidate slot.
#[must_use]
pub fn can_remove_draft(drafts: &[PlayerDraft]) -> bool {
    drafts.len() > MIN_PLAYERS
}

/// A score-tracking session.
///
/// ```
/// use sushi_tally::core::PlayerDraft;
/// use sushi_tally::cards::CardKind;
/// use sushi_tally::core::PlayerId;
/// use sushi_tally::session::{Phase, Session};
///
/// let mut session = Session::with_seed(42);
/// session
///     .start(vec![PlayerDraft::named("Aki"), PlayerDraft::named("Yuki")])
///     .unwrap();
///
/// assert_eq!(session.phase(), Phase::Rounds);
/// assert_eq!(session.quota(), Some(10));
///
/// let card = session.add_card(PlayerId::new(0), CardKind::EggNigiri).unwrap();
/// assert_eq!(session.focus(PlayerId::new(0)).unwrap(), Some(card));
/// ```
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    players: SmallVec<[PlayerView; MAX_PLAYERS]>,
    quota: Option<usize>,
    all_ready: Option<Computed<bool>>,
    ids: CardIdGen,
}

impl Session {
    /// Create a session in Setup with entropy-seeded card ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(CardIdGen::from_entropy())
    }

    /// Create a session with a deterministic id sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_ids(CardIdGen::with_seed(seed))
    }

    fn with_ids(ids: CardIdGen) -> Self {
        Self {
            phase: Phase::Setup,
            players: SmallVec::new(),
            quota: None,
            all_ready: None,
            ids,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cards each player must collect, `None` until the session starts.
    #[must_use]
    pub fn quota(&self) -> Option<usize> {
        self.quota
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The finalized roster, in submission order. Empty during Setup.
    #[must_use]
    pub fn players(&self) -> &[PlayerView] {
        &self.players
    }

    /// Look up a player's round view.
    pub fn player(&self, player: PlayerId) -> Result<&PlayerView, GameError> {
        self.players
            .get(player.index())
            .ok_or(GameError::UnknownPlayer(player))
    }

    fn player_mut(&mut self, player: PlayerId) -> Result<&mut PlayerView, GameError> {
        self.players
            .get_mut(player.index())
            .ok_or(GameError::UnknownPlayer(player))
    }

    fn expect_rounds(&self) -> Result<(), GameError> {
        if self.phase == Phase::Rounds {
            Ok(())
        } else {
            Err(GameError::PhaseMismatch {
                expected: Phase::Rounds,
                actual: self.phase,
            })
        }
    }

    /// True once enough candidates are named for `start` to succeed.
    ///
    /// Fewer named candidates is incomplete input, not an error; the UI
    /// disables its start action on this predicate.
    #[must_use]
    pub fn can_start(candidates: &[PlayerDraft]) -> bool {
        candidates.iter().filter(|draft| draft.is_named()).count() >= MIN_PLAYERS
    }

    /// Freeze the roster and move to the Rounds phase.
    ///
    /// Unnamed candidates are dropped; the remaining players keep their
    /// submission order and get ids `0..n`. One-way: starting twice is a
    /// phase mismatch.
    pub fn start(&mut self, candidates: Vec<PlayerDraft>) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::PhaseMismatch {
                expected: Phase::Setup,
                actual: self.phase,
            });
        }

        let named: Vec<Player> = candidates
            .into_iter()
            .filter(PlayerDraft::is_named)
            .map(|draft| Player::new(draft.name))
            .collect();
        if named.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughNamedPlayers(named.len()));
        }
        let quota = cards_per_player(named.len())?;

        let players: SmallVec<[PlayerView; MAX_PLAYERS]> = named
            .into_iter()
            .enumerate()
            .map(|(index, player)| PlayerView::new(PlayerId::new(index as u8), player, quota))
            .collect();

        let hands: Vec<Cell<Vector<Card>>> = players
            .iter()
            .map(|view| view.cards_cell().clone())
            .collect();
        let all_ready =
            Computed::new(move || hands.iter().all(|hand| hand.with(|cards| cards.len()) == quota));

        self.players = players;
        self.quota = Some(quota);
        self.all_ready = Some(all_ready);
        self.phase = Phase::Rounds;
        Ok(())
    }

    /// True once every player's hand has reached the quota; false during
    /// Setup. Signals "ready for score counting".
    #[must_use]
    pub fn all_ready(&self) -> bool {
        self.all_ready.as_ref().map_or(false, Computed::get)
    }

    /// True while `player` may collect another card this round.
    #[must_use]
    pub fn can_add_card(&self, player: PlayerId) -> bool {
        self.phase == Phase::Rounds
            && self
                .players
                .get(player.index())
                .is_some_and(PlayerView::can_add_card)
    }

    /// Collect a card of `kind` for `player` and focus it.
    pub fn add_card(&mut self, player: PlayerId, kind: CardKind) -> Result<CardId, GameError> {
        self.expect_rounds()?;
        let ids = &mut self.ids;
        let view = self
            .players
            .get_mut(player.index())
            .ok_or(GameError::UnknownPlayer(player))?;
        view.add_card(kind, ids)
    }

    /// Change which of `player`'s cards is open for edits.
    pub fn set_focus(&mut self, player: PlayerId, focus: Option<CardId>) -> Result<(), GameError> {
        self.expect_rounds()?;
        self.player_mut(player)?.set_focus(focus)
    }

    /// The focused card id of `player`'s view.
    pub fn focus(&self, player: PlayerId) -> Result<Option<CardId>, GameError> {
        self.player(player).map(PlayerView::focus)
    }

    /// The focused card of `player`'s view.
    pub fn focused_card(&self, player: PlayerId) -> Result<Option<Card>, GameError> {
        self.player(player)?.focused_card()
    }

    /// Flip the wasabi flag on `player`'s focused card.
    pub fn toggle_wasabi(&mut self, player: PlayerId, card: CardId) -> Result<bool, GameError> {
        self.expect_rounds()?;
        self.player_mut(player)?.toggle_wasabi(card)
    }

    /// True once `player`'s hand has reached the quota.
    pub fn is_ready(&self, player: PlayerId) -> Result<bool, GameError> {
        self.player(player).map(PlayerView::is_ready)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
