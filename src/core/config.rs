//! Engine configuration types.
//!
//! The embedding application configures the engine at startup by providing:
//! - `BoardLayout`: track length, prize placements, display coordinates
//! - `EngineConfig`: topology, throw limit, assist rule, bonus pool
//!
//! The engine never hardcodes a prize table - prize placement is content,
//! supplied by the embedder exactly as the host app supplies zones or
//! card sets to any other configured engine.

use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::core::error::EngineError;
use crate::core::prize::PrizeKind;

/// Track topology: what happens when the token would pass the last cell.
///
/// Different builds of the source game disagreed on this, so it is a
/// required, explicit choice rather than a silent default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardTopology {
    /// Overshooting the last cell ends the game. The token stops at the
    /// final cell; the animation path gains a synthetic finish step.
    FinishLine,
    /// The track is a closed loop; position wraps modulo board length.
    /// Requires a throw limit so the game can end.
    Loop,
}

/// Policy for landing on a bonus cell once the message pool is empty.
///
/// The source left this case unhandled; both policies here are explicit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusExhaustion {
    /// Signal [`EngineError::BonusPoolExhausted`]; the turn is a no-op.
    #[default]
    Fail,
    /// Reshuffle already-delivered messages back into the pool.
    Recycle,
}

/// Board layout: the content half of engine configuration.
///
/// Prize placements are sparse - unlisted cells hold no prize. Display
/// coordinates are owned by presentation and only carried through for
/// animation path lookup; if none are supplied the engine emits a flat
/// left-to-right fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Number of cells on the track.
    pub cell_count: usize,

    /// Sparse prize table: `(cell index, prize)` pairs.
    pub prizes: Vec<(usize, PrizeKind)>,

    /// Per-cell display coordinates. Empty means use the fallback.
    pub coords: Vec<Coord>,

    /// Where the token animates to when it crosses the finish line.
    pub finish_coord: Coord,
}

impl BoardLayout {
    /// Tracks longer than this are rejected; die distances fit in a `u8`.
    pub const MAX_CELLS: usize = 255;

    /// Create a layout with the given number of cells and no prizes.
    #[must_use]
    pub fn new(cell_count: usize) -> Self {
        Self {
            cell_count,
            prizes: Vec::new(),
            coords: Vec::new(),
            finish_coord: Coord::new(cell_count as f32, 0.0),
        }
    }

    /// Place a prize on a cell.
    #[must_use]
    pub fn with_prize(mut self, cell: usize, kind: PrizeKind) -> Self {
        self.prizes.push((cell, kind));
        self
    }

    /// Supply per-cell display coordinates (must match `cell_count`).
    #[must_use]
    pub fn with_coords(mut self, coords: Vec<Coord>) -> Self {
        self.coords = coords;
        self
    }

    /// Set the finish coordinate.
    #[must_use]
    pub fn with_finish_coord(mut self, coord: Coord) -> Self {
        self.finish_coord = coord;
        self
    }

    /// Validate the layout. Called by `Board::build`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.cell_count < 2 {
            return Err(EngineError::InvalidLayout(format!(
                "track needs at least 2 cells, got {}",
                self.cell_count
            )));
        }
        if self.cell_count > Self::MAX_CELLS {
            return Err(EngineError::InvalidLayout(format!(
                "track supports at most {} cells, got {}",
                Self::MAX_CELLS,
                self.cell_count
            )));
        }
        if !self.coords.is_empty() && self.coords.len() != self.cell_count {
            return Err(EngineError::InvalidLayout(format!(
                "{} coords supplied for {} cells",
                self.coords.len(),
                self.cell_count
            )));
        }
        let mut seen = vec![false; self.cell_count];
        for &(cell, _) in &self.prizes {
            if cell >= self.cell_count {
                return Err(EngineError::InvalidLayout(format!(
                    "prize placed at cell {} on a {}-cell track",
                    cell, self.cell_count
                )));
            }
            if seen[cell] {
                return Err(EngineError::InvalidLayout(format!(
                    "duplicate prize at cell {cell}"
                )));
            }
            seen[cell] = true;
        }
        Ok(())
    }
}

/// Complete engine configuration.
///
/// Built once per session and handed to [`crate::turn::TurnEngine::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Track layout and prize placements.
    pub layout: BoardLayout,

    /// Finish-line run or closed loop.
    pub topology: BoardTopology,

    /// Maximum number of throws before the game ends.
    /// Optional for `FinishLine`, required for `Loop`.
    pub throw_limit: Option<u32>,

    /// Enable the assist roll: once past the midpoint with only bonuses
    /// collected, override the die to land on the next prize cell.
    pub assist: bool,

    /// What to do when a bonus landing finds the pool empty.
    pub bonus_exhaustion: BonusExhaustion,

    /// Message pool content, shuffled at session start.
    pub bonus_messages: Vec<String>,
}

impl EngineConfig {
    /// Create a finish-line configuration with the given layout.
    #[must_use]
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            topology: BoardTopology::FinishLine,
            throw_limit: None,
            assist: false,
            bonus_exhaustion: BonusExhaustion::default(),
            bonus_messages: Vec::new(),
        }
    }

    /// Set the board topology.
    #[must_use]
    pub fn with_topology(mut self, topology: BoardTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Limit the number of throws in a session.
    #[must_use]
    pub fn with_throw_limit(mut self, limit: u32) -> Self {
        self.throw_limit = Some(limit);
        self
    }

    /// Enable the assist roll.
    #[must_use]
    pub fn with_assist(mut self) -> Self {
        self.assist = true;
        self
    }

    /// Set the bonus pool exhaustion policy.
    #[must_use]
    pub fn with_bonus_exhaustion(mut self, policy: BonusExhaustion) -> Self {
        self.bonus_exhaustion = policy;
        self
    }

    /// Supply the bonus message pool.
    #[must_use]
    pub fn with_bonus_messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bonus_messages = messages.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration as a whole.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.layout.validate()?;
        if self.topology == BoardTopology::Loop && self.throw_limit.is_none() {
            return Err(EngineError::InvalidConfig(
                "loop topology requires a throw limit".into(),
            ));
        }
        if let Some(0) = self.throw_limit {
            return Err(EngineError::InvalidConfig(
                "throw limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_builder() {
        let layout = BoardLayout::new(31)
            .with_prize(3, PrizeKind::Health)
            .with_prize(5, PrizeKind::Love)
            .with_finish_coord(Coord::new(200.0, 700.0));

        assert_eq!(layout.cell_count, 31);
        assert_eq!(layout.prizes.len(), 2);
        assert_eq!(layout.finish_coord, Coord::new(200.0, 700.0));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_rejects_out_of_range_prize() {
        let layout = BoardLayout::new(10).with_prize(10, PrizeKind::Money);
        assert!(matches!(
            layout.validate(),
            Err(EngineError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_layout_rejects_duplicate_prize() {
        let layout = BoardLayout::new(10)
            .with_prize(4, PrizeKind::Money)
            .with_prize(4, PrizeKind::Love);
        assert!(matches!(
            layout.validate(),
            Err(EngineError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_layout_rejects_tiny_track() {
        assert!(BoardLayout::new(1).validate().is_err());
        assert!(BoardLayout::new(2).validate().is_ok());
    }

    #[test]
    fn test_layout_rejects_coord_mismatch() {
        let layout = BoardLayout::new(5).with_coords(vec![Coord::new(0.0, 0.0); 4]);
        assert!(layout.validate().is_err());

        let layout = BoardLayout::new(5).with_coords(vec![Coord::new(0.0, 0.0); 5]);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_loop_requires_throw_limit() {
        let config = EngineConfig::new(BoardLayout::new(10)).with_topology(BoardTopology::Loop);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));

        let config = config.with_throw_limit(12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_throw_limit_rejected() {
        let config = EngineConfig::new(BoardLayout::new(10)).with_throw_limit(0);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::new(BoardLayout::new(29))
            .with_topology(BoardTopology::Loop)
            .with_throw_limit(10)
            .with_assist()
            .with_bonus_exhaustion(BonusExhaustion::Recycle)
            .with_bonus_messages(["a good year", "a better year"]);

        assert_eq!(config.topology, BoardTopology::Loop);
        assert_eq!(config.throw_limit, Some(10));
        assert!(config.assist);
        assert_eq!(config.bonus_exhaustion, BonusExhaustion::Recycle);
        assert_eq!(config.bonus_messages.len(), 2);
    }
}
