//! Tile spawning and the random sources that drive it.
//!
//! Spawning draws twice from a [`RandomSource`]: once to pick an empty cell,
//! once to pick the value. Nothing else in the crate consumes randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Board, Cell};

/// Chance that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Largest `f64` strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapts any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for tests and replays.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Values outside `[0, 1)` are clamped into range. An empty list always
/// yields 0.0.
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
    draws: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        SequenceSource {
            values: values.into(),
            pos: 0,
            draws: 0,
        }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        value.clamp(0.0, BELOW_ONE)
    }
}

impl Board {
    /// Place a 2 or 4 on a uniformly chosen empty cell.
    ///
    /// Returns the cell and value placed, or `None` without drawing from
    /// `source` when the board is full.
    pub fn spawn_tile<S: RandomSource + ?Sized>(
        &mut self,
        source: &mut S,
        four_probability: f64,
    ) -> Option<(Cell, u32)> {
        let empty = self.count_empty();
        if empty == 0 {
            return None;
        }

        let pick = ((source.next_f64() * empty as f64) as usize).min(empty - 1);
        let cell = self.empty_cells().nth(pick)?;
        let value = if source.next_f64() < 1.0 - four_probability {
            2
        } else {
            4
        };
        self.set(cell, value);
        Some((cell, value))
    }
}
