//! RNG module - seeded piece generation
//!
//! Two randomizers are available:
//! - **Uniform**: every draw picks any of the seven kinds with equal odds
//!   (classic behavior, repeats allowed).
//! - **Bag**: the seven kinds are shuffled into a bag and dealt out before the
//!   next bag is shuffled, so droughts are bounded.
//!
//! Both sit on a small LCG so a seed fully determines the piece sequence.

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;
use serde::Deserialize;

use crate::types::{ParseNameError, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would still advance, but keep seed 0 and 1 equivalent
        // so "no seed" and the default seed agree.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Which piece randomizer a game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Randomizer {
    #[default]
    Uniform,
    Bag,
}

impl Randomizer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }
}

impl fmt::Display for Randomizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Randomizer {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Ok(Randomizer::Bag),
            _ => Err(ParseNameError::new("randomizer")),
        }
    }
}

/// Deterministic source of piece kinds
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    randomizer: Randomizer,
    rng: SimpleRng,
    /// Remaining kinds of the current bag; popped from the back
    bag: ArrayVec<PieceKind, 7>,
}

impl PieceGenerator {
    pub fn new(randomizer: Randomizer, seed: u32) -> Self {
        Self {
            randomizer,
            rng: SimpleRng::new(seed),
            bag: ArrayVec::new(),
        }
    }

    pub fn randomizer(&self) -> Randomizer {
        self.randomizer
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => {
                let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            Randomizer::Bag => {
                if self.bag.is_empty() {
                    self.refill_bag();
                }
                // Refill always leaves seven kinds in the bag.
                self.bag.pop().unwrap_or(PieceKind::I)
            }
        }
    }

    fn refill_bag(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        self.rng.shuffle(&mut self.bag);
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(Randomizer::default(), 1)
    }
}
