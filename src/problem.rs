use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Inclusive range both operands are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandRange {
    pub min: u32,
    pub max: u32,
}

impl OperandRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Largest sum a problem drawn from this range can have
    pub fn max_sum(&self) -> u32 {
        self.max.saturating_mul(2)
    }
}

impl Default for OperandRange {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

/// A single addition fact shown to one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub first: u32,
    pub second: u32,
    pub sum: u32,
}

impl Problem {
    pub fn new(first: u32, second: u32) -> Self {
        Self {
            first,
            second,
            sum: first + second,
        }
    }

    /// Draw both operands independently and uniformly from `range`
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, range: OperandRange) -> Self {
        let first = rng.gen_range(range.min..=range.max);
        let second = rng.gen_range(range.min..=range.max);
        Self::new(first, second)
    }

    pub fn is_answer(&self, value: u32) -> bool {
        self.sum == value
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} =", self.first, self.second)
    }
}
