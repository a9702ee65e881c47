//! Core engine types: RNG, prizes, configuration, errors.
//!
//! This module contains the fundamental building blocks that are
//! layout-agnostic. Embedding applications configure the engine via
//! `EngineConfig` rather than modifying the core.

pub mod config;
pub mod error;
pub mod prize;
pub mod rng;

pub use config::{BoardLayout, BoardTopology, BonusExhaustion, EngineConfig};
pub use error::EngineError;
pub use prize::PrizeKind;
pub use rng::{GameRng, GameRngState};
