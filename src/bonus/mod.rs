//! Bonus message pool and ledger.
//!
//! The pool holds the session's undelivered messages, shuffled at start.
//! Landing on a bonus cell draws the next message without replacement
//! into the ledger. Pool exhaustion is the caller's configured policy
//! (see [`crate::core::BonusExhaustion`]); the pool itself just reports
//! emptiness honestly instead of panicking on an empty draw.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

/// Undelivered bonus messages, in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusPool {
    remaining: Vec<String>,
}

impl BonusPool {
    /// Build a shuffled pool from the configured messages.
    #[must_use]
    pub fn shuffled(messages: &[String], rng: &mut GameRng) -> Self {
        let mut remaining = messages.to_vec();
        rng.shuffle(&mut remaining);
        Self { remaining }
    }

    /// Draw the next message without replacement.
    pub fn draw(&mut self) -> Option<String> {
        self.remaining.pop()
    }

    /// Reshuffle already-delivered messages back in (the `Recycle` policy).
    pub fn refill(&mut self, delivered: &[String], rng: &mut GameRng) {
        self.remaining.extend_from_slice(delivered);
        rng.shuffle(&mut self.remaining);
    }

    /// Messages left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// True when the next bonus landing would find nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Messages delivered this session, in the order they were obtained.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusLedger {
    messages: Vec<String>,
}

impl BonusLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a delivered message.
    pub fn record(&mut self, message: String) {
        self.messages.push(message);
    }

    /// Delivered messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of delivered messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if no message has been delivered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> Vec<String> {
        (0..5).map(|i| format!("message {i}")).collect()
    }

    #[test]
    fn test_draw_without_replacement() {
        let mut rng = GameRng::new(42);
        let mut pool = BonusPool::shuffled(&messages(), &mut rng);

        let mut drawn = Vec::new();
        while let Some(msg) = pool.draw() {
            drawn.push(msg);
        }

        assert_eq!(drawn.len(), 5);
        drawn.sort();
        let mut expected = messages();
        expected.sort();
        assert_eq!(drawn, expected);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut pool1 = BonusPool::shuffled(&messages(), &mut rng1);
        let mut pool2 = BonusPool::shuffled(&messages(), &mut rng2);

        for _ in 0..5 {
            assert_eq!(pool1.draw(), pool2.draw());
        }
    }

    #[test]
    fn test_refill() {
        let mut rng = GameRng::new(42);
        let mut pool = BonusPool::shuffled(&messages(), &mut rng);
        let mut ledger = BonusLedger::new();

        while let Some(msg) = pool.draw() {
            ledger.record(msg);
        }
        assert!(pool.is_empty());
        assert_eq!(ledger.len(), 5);

        pool.refill(ledger.messages(), &mut rng);
        assert_eq!(pool.remaining(), 5);
        assert!(pool.draw().is_some());
    }

    #[test]
    fn test_empty_pool_draw() {
        let mut pool = BonusPool::default();
        assert!(pool.draw().is_none());
    }

    #[test]
    fn test_ledger_preserves_order() {
        let mut ledger = BonusLedger::new();
        ledger.record("first".into());
        ledger.record("second".into());

        assert_eq!(ledger.messages(), &["first".to_string(), "second".into()]);
    }
}
