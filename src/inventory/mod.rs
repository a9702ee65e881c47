//! Prize inventory with stable display ordering.
//!
//! Counts one entry per prize kind collected. The entry order is the
//! display order: descending by count, with ties keeping their previous
//! relative order (stable sort), so a kind that pulls ahead moves up and
//! everything else stays put.

use serde::{Deserialize, Serialize};

use crate::core::prize::PrizeKind;

/// One collected prize kind and how many times it was landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeEntry {
    pub kind: PrizeKind,
    pub count: u32,
}

/// Per-kind prize counts, kept in display order.
///
/// Bonus landings are counted here like any other kind; the messages they
/// grant live in the [`crate::bonus::BonusLedger`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeInventory {
    entries: Vec<PrizeEntry>,
}

impl PrizeInventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one landing on the given prize kind and re-sort for display.
    pub fn credit(&mut self, kind: PrizeKind) {
        match self.entries.iter_mut().find(|e| e.kind == kind) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(PrizeEntry { kind, count: 1 }),
        }
        // Stable: ties keep their prior relative order
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
    }

    /// Count for a single kind. Zero if never collected.
    #[must_use]
    pub fn count(&self, kind: PrizeKind) -> u32 {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map_or(0, |e| e.count)
    }

    /// Entries in display order: descending count, stable on ties.
    #[must_use]
    pub fn entries(&self) -> &[PrizeEntry] {
        &self.entries
    }

    /// Total landings across all kinds, bonus included.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Total landings on non-bonus kinds.
    #[must_use]
    pub fn non_bonus_total(&self) -> u32 {
        self.entries
            .iter()
            .filter(|e| !e.kind.is_bonus())
            .map(|e| e.count)
            .sum()
    }

    /// True when at least one bonus was collected and nothing else.
    /// This is the trigger condition for the assist roll.
    #[must_use]
    pub fn only_bonuses(&self) -> bool {
        self.count(PrizeKind::Bonus) > 0 && self.non_bonus_total() == 0
    }

    /// True when nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
