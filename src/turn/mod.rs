//! The turn engine: roll, resolve, acknowledge, reset.
//!
//! One `TurnEngine` instance owns the session's authoritative state and is
//! passed explicitly to the presentation layer - no globals. The engine is
//! reentrancy-unsafe by design: it has no queue, and the caller must
//! acknowledge each turn's playback before resolving the next one. All
//! guards are typed errors that leave state untouched.
//!
//! ## Turn lifecycle
//!
//! ```
//! use dice_track::{BoardLayout, EngineConfig, PrizeKind, TurnEngine};
//!
//! let config = EngineConfig::new(
//!     BoardLayout::new(31)
//!         .with_prize(3, PrizeKind::Health)
//!         .with_prize(5, PrizeKind::Love),
//! );
//! let mut engine = TurnEngine::new(config, 42).unwrap();
//!
//! let die = engine.roll();
//! let result = engine.resolve_turn(die).unwrap();
//! // ... presentation animates result.path, shows result.landed_prize ...
//! engine.acknowledge_turn();
//! ```

pub mod result;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::bonus::{BonusLedger, BonusPool};
use crate::core::config::{BoardTopology, BonusExhaustion, EngineConfig};
use crate::core::error::EngineError;
use crate::core::prize::PrizeKind;
use crate::core::rng::GameRng;
use crate::inventory::PrizeInventory;
use crate::snapshot::EngineSnapshot;

pub use result::{Path, PathStep, TurnResult};

/// Token position and end-of-game flags for the single player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current cell, `None` before the first throw.
    pub position: Option<usize>,
    /// Throws taken this session.
    pub throws_taken: u32,
    /// One-way until `reset()`.
    pub game_over: bool,
}

/// The board game turn engine.
///
/// Owns board, player state, prize inventory, bonus pool/ledger, and the
/// RNG. Exposes one decision function per turn ([`resolve_turn`]) plus the
/// roll and lifecycle operations around it.
///
/// [`resolve_turn`]: TurnEngine::resolve_turn
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: EngineConfig,
    board: Board,
    rng: GameRng,
    player: PlayerState,
    inventory: PrizeInventory,
    ledger: BonusLedger,
    pool: BonusPool,
    turn_in_progress: bool,
}

impl TurnEngine {
    /// Create an engine from validated configuration.
    ///
    /// Builds the board and shuffles the bonus pool from the seeded RNG.
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, EngineError> {
        config.validate()?;
        let board = Board::build(&config.layout)?;
        let mut rng = GameRng::new(seed);
        let pool = BonusPool::shuffled(&config.bonus_messages, &mut rng);

        Ok(Self {
            config,
            board,
            rng,
            player: PlayerState::default(),
            inventory: PrizeInventory::new(),
            ledger: BonusLedger::new(),
            pool,
            turn_in_progress: false,
        })
    }

    /// Roll the die, applying the assist override when it fires.
    ///
    /// Without assist this is a uniform draw from `1..=6`. The assist
    /// override (see [`assist_distance`]) is deterministic given state and
    /// may exceed 6.
    ///
    /// [`assist_distance`]: TurnEngine::assist_distance
    pub fn roll(&mut self) -> u8 {
        if let Some(distance) = self.assist_distance() {
            log::debug!("assist override: rolling {distance} to reach the next prize cell");
            return distance;
        }
        self.rng.roll_die()
    }

    /// The assist-rule override distance, if the rule fires right now.
    ///
    /// Fires when all of these hold: assist is configured on, the game is
    /// running, the token is at or past the board midpoint, and the
    /// inventory holds at least one bonus and nothing else. The distance is
    /// the minimum forward offset landing exactly on the next cell holding
    /// any prize, scanning at most to the last cell (finish line) or one
    /// cell short of a full lap (loop) - never back onto the cell the
    /// token stands on. Returns `None` when no qualifying cell is within
    /// that bound; [`roll`] then falls back to a normal uniform roll, which
    /// is this engine's answer to the source's unbounded scan.
    ///
    /// [`roll`]: TurnEngine::roll
    #[must_use]
    pub fn assist_distance(&self) -> Option<u8> {
        if !self.config.assist || self.player.game_over {
            return None;
        }
        let position = self.player.position?;
        if position < self.board.midpoint() || !self.inventory.only_bonuses() {
            return None;
        }

        let len = self.board.len();
        // Strictly ahead: a full-lap offset would land back on the origin
        // cell, and assisting onto the bonus cell the token already sits on
        // would perpetuate the bonuses-only state the rule exists to break.
        let max_scan = match self.config.topology {
            BoardTopology::FinishLine => self.board.last_index().saturating_sub(position),
            BoardTopology::Loop => len - 1,
        };
        for offset in 1..=max_scan {
            let index = (position + offset) % len;
            if self.board.prize_at(index).is_some() {
                // Layout validation caps tracks at 255 cells, so this fits
                return Some(offset as u8);
            }
        }
        None
    }

    /// Roll and resolve in one call.
    ///
    /// Equivalent to [`roll`] followed by resolving the rolled value.
    /// Guard errors are checked before any entropy is consumed.
    ///
    /// [`roll`]: TurnEngine::roll
    pub fn take_turn(&mut self) -> Result<TurnResult, EngineError> {
        self.check_turn_allowed()?;
        let die = self.roll();
        self.resolve(die)
    }

    /// Resolve one turn for an externally supplied die value.
    ///
    /// `die` must be in `1..=6` unless it matches the current assist
    /// override distance. Rejects calls after game over or before the
    /// previous turn was acknowledged; every error is a strict no-op.
    pub fn resolve_turn(&mut self, die: u8) -> Result<TurnResult, EngineError> {
        if die == 0 || (die > 6 && Some(die) != self.assist_distance()) {
            return Err(EngineError::InvalidDie(die));
        }
        self.resolve(die)
    }

    /// Presentation signals that playback for the last turn finished.
    /// Idempotent.
    pub fn acknowledge_turn(&mut self) {
        self.turn_in_progress = false;
    }

    /// Start over: clears player state, inventory, ledger, and flags, and
    /// reshuffles a fresh bonus pool. The board is untouched and the RNG
    /// stream continues (a replayed session needs a fresh engine, not a
    /// reset one).
    pub fn reset(&mut self) {
        self.player = PlayerState::default();
        self.inventory = PrizeInventory::new();
        self.ledger = BonusLedger::new();
        self.pool = BonusPool::shuffled(&self.config.bonus_messages, &mut self.rng);
        self.turn_in_progress = false;
    }

    fn check_turn_allowed(&self) -> Result<(), EngineError> {
        if self.player.game_over {
            return Err(EngineError::GameOver);
        }
        if self.turn_in_progress {
            return Err(EngineError::TurnInProgress);
        }
        Ok(())
    }

    /// The actual state transition. `die` is trusted here; public entry
    /// points validate it.
    fn resolve(&mut self, die: u8) -> Result<TurnResult, EngineError> {
        self.check_turn_allowed()?;

        let previous = self.player.position;
        // Not-yet-started counts as one before cell 0
        let start = previous.map_or(-1, |p| p as i64);
        let len = self.board.len() as i64;
        let distance = i64::from(die);

        let mut path = Path::new();
        let (landing, crossed_finish) = match self.config.topology {
            BoardTopology::FinishLine => {
                let last = self.board.last_index() as i64;
                let target = start + distance;
                let clamped = target.min(last);
                for index in (start + 1)..=clamped {
                    path.push(self.cell_step(index as usize));
                }
                if target > last {
                    path.push(PathStep::Finish {
                        coord: self.board.finish_coord(),
                    });
                }
                (clamped as usize, target > last)
            }
            BoardTopology::Loop => {
                for step in 1..=distance {
                    let index = (start + step).rem_euclid(len) as usize;
                    path.push(self.cell_step(index));
                }
                ((start + distance).rem_euclid(len) as usize, false)
            }
        };

        // The cell actually entered last; an overshoot from the final cell
        // enters no new cell and credits nothing.
        let landed_on = path.iter().rev().find_map(PathStep::cell_index);
        let landed_prize = landed_on.and_then(|index| self.board.prize_at(index));

        // Check pool availability before touching any state so a Fail-policy
        // exhaustion leaves the engine exactly as it was.
        let bonus_message = if landed_prize == Some(PrizeKind::Bonus) {
            if self.pool.is_empty() {
                match self.config.bonus_exhaustion {
                    BonusExhaustion::Fail => return Err(EngineError::BonusPoolExhausted),
                    BonusExhaustion::Recycle => {
                        if self.ledger.is_empty() {
                            return Err(EngineError::BonusPoolExhausted);
                        }
                        log::debug!(
                            "bonus pool empty, recycling {} delivered messages",
                            self.ledger.len()
                        );
                        let delivered = self.ledger.messages().to_vec();
                        self.pool.refill(&delivered, &mut self.rng);
                    }
                }
            }
            self.pool.draw()
        } else {
            None
        };

        self.player.position = Some(landing);
        self.player.throws_taken += 1;

        let mut game_over = crossed_finish;
        if let Some(limit) = self.config.throw_limit {
            if self.player.throws_taken >= limit {
                game_over = true;
            }
        }
        self.player.game_over = game_over;

        if let Some(kind) = landed_prize {
            self.inventory.credit(kind);
        }
        if let Some(message) = &bonus_message {
            self.ledger.record(message.clone());
        }

        self.turn_in_progress = true;

        Ok(TurnResult {
            previous_position: previous,
            new_position: landing,
            path,
            landed_prize,
            bonus_message,
            is_game_over: game_over,
            throws_taken: self.player.throws_taken,
        })
    }

    fn cell_step(&self, index: usize) -> PathStep {
        PathStep::Cell {
            index,
            coord: self.board.cell(index).coord,
        }
    }

    // === Accessors ===

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The immutable board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current token position, `None` before the first throw.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.player.position
    }

    /// Throws taken this session.
    #[must_use]
    pub fn throws_taken(&self) -> u32 {
        self.player.throws_taken
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.player.game_over
    }

    /// True while a resolved turn awaits [`acknowledge_turn`].
    ///
    /// [`acknowledge_turn`]: TurnEngine::acknowledge_turn
    #[must_use]
    pub fn turn_in_progress(&self) -> bool {
        self.turn_in_progress
    }

    /// Collected prizes in display order.
    #[must_use]
    pub fn inventory(&self) -> &PrizeInventory {
        &self.inventory
    }

    /// Bonus messages obtained so far.
    #[must_use]
    pub fn ledger(&self) -> &BonusLedger {
        &self.ledger
    }

    /// Undrawn bonus messages left in the pool.
    #[must_use]
    pub fn bonus_remaining(&self) -> usize {
        self.pool.remaining()
    }

    // === Snapshots ===

    /// Capture the full engine state for save/restore or replay.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config.clone(),
            board: self.board.clone(),
            player: self.player.clone(),
            inventory: self.inventory.clone(),
            ledger: self.ledger.clone(),
            pool: self.pool.clone(),
            rng: self.rng.state(),
            turn_in_progress: self.turn_in_progress,
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// Replaying the same die sequence from a restored engine yields
    /// results identical to the original.
    pub fn restore(snapshot: EngineSnapshot) -> Result<Self, EngineError> {
        snapshot.config.validate()?;
        Ok(Self {
            config: snapshot.config,
            board: snapshot.board,
            rng: GameRng::from_state(&snapshot.rng),
            player: snapshot.player,
            inventory: snapshot.inventory,
            ledger: snapshot.ledger,
            pool: snapshot.pool,
            turn_in_progress: snapshot.turn_in_progress,
        })
    }
}
