use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The only source of non-determinism in the engine.
///
/// Attacks roll precision and critical hits through it, paralysis rolls
/// whether the creature can act, and sleep may draw its duration from it.
pub trait RandomSource {
    /// Returns true with roughly `percent`% probability (1..=100).
    fn chance(&mut self, percent: u8) -> bool;

    /// Draws an integer from the half-open range `[low, high)`.
    fn number(&mut self, low: i32, high: i32) -> i32;
}

/// Production randomness backed by `rand`'s `StdRng`.
#[derive(Debug, Clone)]
pub struct EngineRng {
    inner: StdRng,
}

impl EngineRng {
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for EngineRng {
    fn chance(&mut self, percent: u8) -> bool {
        let roll: u8 = self.inner.random_range(1..=100);
        roll <= percent
    }

    fn number(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.inner.random_range(low..high)
    }
}

/// Deterministic stand-in for tests and replays.
///
/// Holds a script of rolls in 1..=100. `chance(p)` consumes one roll and
/// succeeds when it is `<= p`; `number(low, high)` consumes one roll and
/// clamps it into the range.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    outcomes: Vec<u8>,
    index: usize,
    looping: bool,
}

impl ScriptedRng {
    pub fn new(outcomes: Vec<u8>) -> Self {
        Self {
            outcomes,
            index: 0,
            looping: false,
        }
    }

    /// Replays the script from the start once it runs out.
    pub fn looping(outcomes: Vec<u8>) -> Self {
        Self {
            outcomes,
            index: 0,
            looping: true,
        }
    }

    /// Alternates 1 and 100, so precision rolls hit and crit rolls fail as
    /// long as draws come in precision/crit pairs.
    pub fn always_hit_no_crit() -> Self {
        Self::looping(vec![1, 100])
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len().saturating_sub(self.index)
    }

    fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            if self.looping && !self.outcomes.is_empty() {
                self.index = 0;
            } else {
                panic!(
                    "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                    reason
                );
            }
        }
        let outcome = self.outcomes[self.index];
        tracing::trace!(outcome, reason, "scripted roll consumed");
        self.index += 1;
        outcome
    }
}

impl RandomSource for ScriptedRng {
    fn chance(&mut self, percent: u8) -> bool {
        self.next_outcome("chance") <= percent
    }

    fn number(&mut self, low: i32, high: i32) -> i32 {
        let roll = self.next_outcome("number") as i32;
        if high <= low {
            return low;
        }
        roll.clamp(low, high - 1)
    }
}
