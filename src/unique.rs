//! Bounded-attempt source of unique values.

use crate::error::{GenError, Result};
use ahash::AHashSet;

/// Candidates drawn per value before giving up.
pub const MAX_UNIQUE_ATTEMPTS: usize = 1000;

/// Tracks values already handed out and rejects repeats.
///
/// Candidates come from a caller-supplied closure, so determinism is whatever
/// the closure's RNG gives. `space` is the number of distinct values that
/// closure can ever produce.
#[derive(Debug)]
pub struct UniqueValues {
    kind: &'static str,
    seen: AHashSet<String>,
    space: u64,
    max_attempts: usize,
}

impl UniqueValues {
    pub fn new(kind: &'static str, space: u64) -> Self {
        Self::with_max_attempts(kind, space, MAX_UNIQUE_ATTEMPTS)
    }

    pub fn with_max_attempts(kind: &'static str, space: u64, max_attempts: usize) -> Self {
        Self {
            kind,
            seen: AHashSet::new(),
            space,
            max_attempts,
        }
    }

    /// Fail up front when `count` more values cannot fit in what is left.
    pub fn check_capacity(&self, count: usize) -> Result<()> {
        let available = self.space.saturating_sub(self.seen.len() as u64);
        if count as u64 > available {
            return Err(GenError::UniqueSpaceExceeded {
                kind: self.kind,
                requested: count,
                available,
            });
        }
        Ok(())
    }

    /// Draw candidates until one has not been seen, up to the attempt limit.
    pub fn next<F>(&mut self, mut candidate: F) -> Result<String>
    where
        F: FnMut() -> String,
    {
        for _ in 0..self.max_attempts {
            let value = candidate();
            if !self.seen.contains(&value) {
                self.seen.insert(value.clone());
                return Ok(value);
            }
        }
        Err(GenError::UniquenessExhausted {
            kind: self.kind,
            attempts: self.max_attempts,
        })
    }
}
