//! Engine error types.
//!
//! The engine has no I/O, so every error is a contract violation by the
//! caller or a configured resource running dry. All errors leave engine
//! state unchanged.

use thiserror::Error;

/// Errors surfaced by the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `resolve_turn` called after the game ended. Only `reset()` clears this.
    #[error("game is over; reset to start a new run")]
    GameOver,

    /// `resolve_turn` called before the previous turn's playback was
    /// acknowledged. The engine has no queue; strictly one turn at a time.
    #[error("previous turn not yet acknowledged")]
    TurnInProgress,

    /// Die value outside `1..=6` that is not an assist override.
    #[error("die value {0} is not a valid roll")]
    InvalidDie(u8),

    /// Landed on a bonus cell with an empty message pool under the
    /// `Fail` exhaustion policy.
    #[error("bonus message pool is exhausted")]
    BonusPoolExhausted,

    /// Board layout rejected at construction.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// Engine configuration rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
