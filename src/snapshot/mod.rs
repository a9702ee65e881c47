//! Serializable engine snapshots.
//!
//! An [`EngineSnapshot`] captures everything a session holds: the board,
//! player state, inventory, ledger, undrawn pool, configuration, and the
//! RNG stream position. Restoring one and replaying the same die sequence
//! reproduces the original `TurnResult`s exactly.
//!
//! Snapshots serialize with any serde format; `bincode` gives compact
//! bytes, `serde_json` a debuggable dump.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::bonus::{BonusLedger, BonusPool};
use crate::core::config::EngineConfig;
use crate::core::rng::GameRngState;
use crate::inventory::PrizeInventory;
use crate::turn::PlayerState;

/// Complete engine state, captured via [`crate::turn::TurnEngine::snapshot`]
/// and restored via [`crate::turn::TurnEngine::restore`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Configuration the engine was built with.
    pub config: EngineConfig,
    /// The built board (redundant with `config.layout`, but stored so a
    /// snapshot stands alone).
    pub board: Board,
    /// Token position and flags.
    pub player: PlayerState,
    /// Collected prizes in display order.
    pub inventory: PrizeInventory,
    /// Bonus messages delivered so far.
    pub ledger: BonusLedger,
    /// Bonus messages still undrawn.
    pub pool: BonusPool,
    /// RNG stream position.
    pub rng: GameRngState,
    /// Whether a resolved turn still awaits acknowledgement.
    pub turn_in_progress: bool,
}
