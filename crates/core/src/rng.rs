//! Injectable randomness consumed by generation and combat.
//! Production code draws from a seeded ChaCha stream; tests script exact draws.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in `[lo, hi)`. Requires `lo < hi`.
    fn next_in(&mut self, lo: usize, hi: usize) -> usize;

    /// `n` distinct integers in `[lo, hi)`, in draw order. `n` is capped at the range size.
    fn unique_sample(&mut self, n: usize, lo: usize, hi: usize) -> Vec<usize> {
        let n = n.min(hi.saturating_sub(lo));
        let mut picked = Vec::with_capacity(n);
        while picked.len() < n {
            let value = self.next_in(lo, hi);
            if !picked.contains(&value) {
                picked.push(value);
            }
        }
        picked
    }

    /// `n` integers in `[lo, hi)`, repeats allowed.
    fn repeatable_sample(&mut self, n: usize, lo: usize, hi: usize) -> Vec<usize> {
        (0..n).map(|_| self.next_in(lo, hi)).collect()
    }

    fn reseed(&mut self, seed: u64);
}

pub struct SeededSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn next_in(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo < hi, "empty range {lo}..{hi}");
        let span = (hi - lo) as u64;
        // Widening multiply with rejection keeps the draw unbiased.
        let threshold = span.wrapping_neg() % span;
        loop {
            let wide = u128::from(self.rng.next_u64()) * u128::from(span);
            if (wide as u64) >= threshold {
                return lo + (wide >> 64) as usize;
            }
        }
    }

    fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }
}

/// Fixed-sequence source for deterministic tests.
///
/// `next_in` cycles through `draws`, mapping each value into the requested range with
/// `lo + v % (hi - lo)`. `unique_sample` consumes the separate `samples` script the same
/// way, skipping duplicates; once that script runs dry the remaining picks take the lowest
/// unused values. An empty draw script behaves like a constant `0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    draws: Vec<usize>,
    draw_cursor: usize,
    samples: Vec<usize>,
    sample_cursor: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, ..Self::default() }
    }

    pub fn with_samples(mut self, samples: Vec<usize>) -> Self {
        self.samples = samples;
        self.sample_cursor = 0;
        self
    }

    pub fn draws_taken(&self) -> usize {
        self.draw_cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_in(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo < hi, "empty range {lo}..{hi}");
        let value = match self.draws.len() {
            0 => 0,
            len => self.draws[self.draw_cursor % len],
        };
        self.draw_cursor += 1;
        lo + value % (hi - lo)
    }

    fn unique_sample(&mut self, n: usize, lo: usize, hi: usize) -> Vec<usize> {
        let n = n.min(hi.saturating_sub(lo));
        let mut picked = Vec::with_capacity(n);
        while picked.len() < n && self.sample_cursor < self.samples.len() {
            let value = lo + self.samples[self.sample_cursor] % (hi - lo);
            self.sample_cursor += 1;
            if !picked.contains(&value) {
                picked.push(value);
            }
        }
        let mut fill = lo;
        while picked.len() < n {
            if !picked.contains(&fill) {
                picked.push(fill);
            }
            fill += 1;
        }
        picked
    }

    fn reseed(&mut self, _seed: u64) {
        self.draw_cursor = 0;
        self.sample_cursor = 0;
    }
}
