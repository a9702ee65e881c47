//! # dice-track
//!
//! A deterministic turn engine for dice-driven track board games: roll a
//! die, move a token along a track, collect prizes, draw bonus messages,
//! detect the end of the run. The engine owns the authoritative state and
//! exposes one decision function per turn; rendering, tweening, audio, and
//! everything else visual stays with the embedding presentation layer,
//! which consumes [`TurnResult`]s to play turns back.
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: No hardcoded prize table or track length.
//!    Embedders supply a `BoardLayout` and bonus messages at startup.
//!
//! 2. **One Owned Instance**: A `TurnEngine` is passed explicitly to the
//!    presentation layer - no process-wide globals, no hidden state.
//!
//! 3. **Explicit Behavioral Forks**: Loop-vs-finish-line topology and the
//!    bonus pool exhaustion policy are required configuration, not silent
//!    defaults.
//!
//! 4. **Deterministic**: One seeded RNG stream drives rolls and shuffles;
//!    snapshots capture its position, so restored sessions replay exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, prize enumeration, configuration, errors
//! - `board`: cells, coordinates, board construction
//! - `inventory`: prize counts with stable display ordering
//! - `bonus`: bonus message pool and ledger
//! - `turn`: the turn engine, turn results, animation paths
//! - `snapshot`: serializable engine state for save/restore and replay

pub mod board;
pub mod bonus;
pub mod core;
pub mod inventory;
pub mod snapshot;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    BoardLayout, BoardTopology, BonusExhaustion, EngineConfig, EngineError, GameRng, GameRngState,
    PrizeKind,
};

pub use crate::board::{Board, Cell, Coord};

pub use crate::bonus::{BonusLedger, BonusPool};

pub use crate::inventory::{PrizeEntry, PrizeInventory};

pub use crate::snapshot::EngineSnapshot;

pub use crate::turn::{Path, PathStep, PlayerState, TurnEngine, TurnResult};
