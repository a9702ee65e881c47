//! Prize enumeration.
//!
//! A closed enum replaces the source material's duck-typed trophy table:
//! display names are direct accessors, never a reverse lookup by value.
//! Cells with no prize carry `Option<PrizeKind>::None` rather than a
//! sentinel variant.

use serde::{Deserialize, Serialize};

/// The category of reward a cell may hold.
///
/// `Bonus` is special: instead of a fixed trophy it grants one message
/// drawn from the bonus pool (see [`crate::bonus::BonusPool`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrizeKind {
    Money,
    Love,
    Career,
    Health,
    Bonus,
}

impl PrizeKind {
    /// All prize kinds, in canonical declaration order.
    pub const ALL: [PrizeKind; 5] = [
        PrizeKind::Money,
        PrizeKind::Love,
        PrizeKind::Career,
        PrizeKind::Health,
        PrizeKind::Bonus,
    ];

    /// Human-readable name for display.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            PrizeKind::Money => "Money",
            PrizeKind::Love => "Love",
            PrizeKind::Career => "Career",
            PrizeKind::Health => "Health",
            PrizeKind::Bonus => "Bonus",
        }
    }

    /// True for the bonus kind, which draws from the message pool
    /// instead of counting as a trophy in its own right.
    #[must_use]
    pub const fn is_bonus(self) -> bool {
        matches!(self, PrizeKind::Bonus)
    }
}

impl std::fmt::Display for PrizeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(PrizeKind::Money.display_name(), "Money");
        assert_eq!(PrizeKind::Bonus.display_name(), "Bonus");
        assert_eq!(format!("{}", PrizeKind::Love), "Love");
    }

    #[test]
    fn test_is_bonus() {
        assert!(PrizeKind::Bonus.is_bonus());
        assert!(!PrizeKind::Health.is_bonus());
    }

    #[test]
    fn test_all_is_exhaustive() {
        assert_eq!(PrizeKind::ALL.len(), 5);
        for kind in PrizeKind::ALL {
            // Every kind round-trips through serde
            let json = serde_json::to_string(&kind).unwrap();
            let back: PrizeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }
}
