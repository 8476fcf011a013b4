//! Card kind enumeration.
//!
//! Ten kinds: three nigiri sub-kinds sharing one payload shape (the wasabi
//! flag), the maki roll (an amount), and six kinds with no extra data.

use serde::{Deserialize, Serialize};

/// The discriminant tag identifying which card variant an instance is.
///
/// Serialized and displayed in kebab-case (`squid-nigiri`, `maki-roll`, …).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    SquidNigiri,
    EggNigiri,
    SalmonNigiri,
    MakiRoll,
    Tempura,
    Wasabi,
    Pudding,
    Sashimi,
    Dumpling,
    Chopsticks,
}

impl CardKind {
    /// Every card kind, in declaration order.
    pub const ALL: [CardKind; 10] = [
        CardKind::SquidNigiri,
        CardKind::EggNigiri,
        CardKind::SalmonNigiri,
        CardKind::MakiRoll,
        CardKind::Tempura,
        CardKind::Wasabi,
        CardKind::Pudding,
        CardKind::Sashimi,
        CardKind::Dumpling,
        CardKind::Chopsticks,
    ];

    /// Check if this is one of the three nigiri sub-kinds.
    ///
    /// ```
    /// use sushi_tally::cards::CardKind;
    ///
    /// assert!(CardKind::EggNigiri.is_nigiri());
    /// assert!(!CardKind::Tempura.is_nigiri());
    /// ```
    #[must_use]
    pub const fn is_nigiri(self) -> bool {
        matches!(
            self,
            CardKind::SquidNigiri | CardKind::EggNigiri | CardKind::SalmonNigiri
        )
    }

    /// Kebab-case name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::SquidNigiri => "squid-nigiri",
            CardKind::EggNigiri => "egg-nigiri",
            CardKind::SalmonNigiri => "salmon-nigiri",
            CardKind::MakiRoll => "maki-roll",
            CardKind::Tempura => "tempura",
            CardKind::Wasabi => "wasabi",
            CardKind::Pudding => "pudding",
            CardKind::Sashimi => "sashimi",
            CardKind::Dumpling => "dumpling",
            CardKind::Chopsticks => "chopsticks",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The three nigiri sub-kinds.
///
/// A separate enum so the nigiri payload cannot carry a non-nigiri tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NigiriKind {
    Squid,
    Egg,
    Salmon,
}

impl NigiriKind {
    /// Narrow a `CardKind` to a nigiri sub-kind, `None` for anything else.
    #[must_use]
    pub const fn from_kind(kind: CardKind) -> Option<Self> {
        match kind {
            CardKind::SquidNigiri => Some(NigiriKind::Squid),
            CardKind::EggNigiri => Some(NigiriKind::Egg),
            CardKind::SalmonNigiri => Some(NigiriKind::Salmon),
            _ => None,
        }
    }

    /// The full card kind this sub-kind corresponds to.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            NigiriKind::Squid => CardKind::SquidNigiri,
            NigiriKind::Egg => CardKind::EggNigiri,
            NigiriKind::Salmon => CardKind::SalmonNigiri,
        }
    }
}
