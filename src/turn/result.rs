//! Turn results and animation paths.
//!
//! A [`TurnResult`] is everything the presentation layer needs to play a
//! turn back: where the token was, where it ended up, every coordinate to
//! tween through on the way, and what (if anything) was won. The engine
//! computes the whole path up front; stepwise traversal and completion
//! callbacks belong to the animation collaborator.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Coord;
use crate::core::prize::PrizeKind;

/// One step of the animation path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathStep {
    /// The token moves onto a real cell.
    Cell { index: usize, coord: Coord },
    /// The token crosses the finish line (finish-line topology only,
    /// always the final step when present).
    Finish { coord: Coord },
}

impl PathStep {
    /// Display coordinate to tween to for this step.
    #[must_use]
    pub fn coord(&self) -> Coord {
        match self {
            PathStep::Cell { coord, .. } | PathStep::Finish { coord } => *coord,
        }
    }

    /// Cell index, or `None` for the synthetic finish step.
    #[must_use]
    pub fn cell_index(&self) -> Option<usize> {
        match self {
            PathStep::Cell { index, .. } => Some(*index),
            PathStep::Finish { .. } => None,
        }
    }
}

/// Animation path. A normal roll is at most 6 steps plus a finish step;
/// assist rolls can spill past the inline capacity.
pub type Path = SmallVec<[PathStep; 8]>;

/// The authoritative outcome of one resolved turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Where the token stood before the roll; `None` if not yet started.
    pub previous_position: Option<usize>,

    /// Where the token stands now. On a finish-line overshoot this is the
    /// last real cell; the token never moves past the board's extent.
    pub new_position: usize,

    /// Cells to animate through, in traversal order.
    pub path: Path,

    /// Prize on the cell the token landed on, if any.
    pub landed_prize: Option<PrizeKind>,

    /// Message drawn from the bonus pool, when `landed_prize` is `Bonus`.
    pub bonus_message: Option<String>,

    /// True if this turn ended the game.
    pub is_game_over: bool,

    /// Total throws taken this session, this one included.
    pub throws_taken: u32,
}

impl TurnResult {
    /// Index of the cell the token actually landed on during this turn,
    /// `None` if the token did not enter any new cell (overshoot from the
    /// final cell).
    #[must_use]
    pub fn landing_cell(&self) -> Option<usize> {
        self.path.iter().rev().find_map(PathStep::cell_index)
    }
}
