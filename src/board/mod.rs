//! Board construction and cell lookup.
//!
//! A `Board` is a fixed, ordered run of cells built once per session from
//! a [`BoardLayout`] and immutable thereafter. The engine only reads cell
//! prizes and coordinates; everything visual about a cell belongs to the
//! presentation layer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::BoardLayout;
use crate::core::error::EngineError;
use crate::core::prize::PrizeKind;

/// 2D display coordinate, owned by presentation.
///
/// Carried on cells only so the engine can emit animation paths that the
/// presentation layer plays back without re-deriving positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f32,
    pub y: f32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One discrete position on the game track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Position along the track, `0..board.len()`.
    pub index: usize,
    /// Prize landed-on tokens collect, if any.
    pub prize: Option<PrizeKind>,
    /// Display coordinate for animation.
    pub coord: Coord,
}

/// Fixed, ordered sequence of cells plus the synthetic finish coordinate.
///
/// Built once per session via [`Board::build`]; prizes never change after
/// construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
    finish_coord: Coord,
}

impl Board {
    /// Build a board from a layout, validating it first.
    pub fn build(layout: &BoardLayout) -> Result<Self, EngineError> {
        layout.validate()?;

        let prizes: FxHashMap<usize, PrizeKind> = layout.prizes.iter().copied().collect();

        let cells = (0..layout.cell_count)
            .map(|index| Cell {
                index,
                prize: prizes.get(&index).copied(),
                coord: layout
                    .coords
                    .get(index)
                    .copied()
                    .unwrap_or_else(|| Coord::new(index as f32, 0.0)),
            })
            .collect();

        Ok(Self {
            cells,
            finish_coord: layout.finish_coord,
        })
    }

    /// Number of cells on the track.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the board has no cells. Never true for a built board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the last cell.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.cells.len() - 1
    }

    /// Midpoint used by the assist rule: a token at or beyond this index
    /// counts as past halfway.
    #[must_use]
    pub fn midpoint(&self) -> usize {
        self.cells.len() / 2
    }

    /// Cell at the given index.
    #[must_use]
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Prize on the given cell, if any.
    #[must_use]
    pub fn prize_at(&self, index: usize) -> Option<PrizeKind> {
        self.cells[index].prize
    }

    /// Where the token animates to when crossing the finish line.
    #[must_use]
    pub fn finish_coord(&self) -> Coord {
        self.finish_coord
    }

    /// Iterate over all cells in track order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
