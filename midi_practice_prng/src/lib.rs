// Deterministic, seedable bit-stream generator for routine generation.
//
// Implements a Fibonacci-style linear-feedback shift register over a
// configurable register width (1..=52 bits). Each call to `next()` clocks the
// register `bit_length` times, collecting the low bit on every clock into an
// output word (MSB first), and normalizes that word into [0, 1).
//
// This crate is the single source of randomness for the whole practice
// engine: chord selection, note selection, color assignment, and the prompt
// shuffle in `midi_practice_routine` all draw from one `NumberGenerator` per
// routine part. Only the *seed* may come from OS entropy (`from_entropy` and
// the `bitN(None)` constructors); everything after seeding is reproducible.
//
// **Critical constraint: determinism.** Given the same seed and bit length,
// the sequence of `next()` values must be identical on every platform, and
// `reset()` must restart that sequence exactly. The register is held in a
// `u64` and never exceeds 52 bits, so the normalized output is exactly
// representable as an `f64`.

use serde::{Deserialize, Serialize};

/// Widest supported register, in bits. Outputs up to 2^52 stay exact in `f64`.
pub const MAX_BIT_LENGTH: u32 = 52;

/// Register width used when none is requested explicitly.
pub const DEFAULT_BIT_LENGTH: u32 = 32;

/// LFSR-based uniform generator with a restartable sequence.
///
/// The register state is never zero: the seed is clamped into
/// `[1, max_number - 1]`, and the feedback function cannot map a non-zero
/// state to zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberGenerator {
    seed: u64,
    bit_length: u32,
    max_number: u64,
    state: u64,
}

impl NumberGenerator {
    /// Create a generator from a real-valued seed.
    ///
    /// `bit_length` is clamped into `[1, MAX_BIT_LENGTH]`. A fractional seed in
    /// `(-1, 1)` (e.g. straight from a uniform draw) is scaled by
    /// `max_number` first. The result is rounded to the nearest whole number
    /// and clamped into `[1, max_number - 1]`, so the register never starts
    /// all-zero.
    pub fn new(seed: f64, bit_length: u32) -> Self {
        let bit_length = bit_length.clamp(1, MAX_BIT_LENGTH);
        let max_number = 1u64 << bit_length;

        let scaled = if seed > -1.0 && seed < 1.0 {
            seed * max_number as f64
        } else {
            seed
        };

        // `max` also maps NaN to the lower bound.
        let clamped = scaled.round().max(1.0).min((max_number - 1) as f64);
        let seed = clamped as u64;

        Self {
            seed,
            bit_length,
            max_number,
            state: seed,
        }
    }

    /// Create a generator with a seed drawn from OS entropy.
    pub fn from_entropy(bit_length: u32) -> Self {
        Self::new(random_seed(), bit_length)
    }

    /// 8-bit generator; `None` picks a random seed.
    pub fn bit8(seed: Option<f64>) -> Self {
        Self::new(seed.unwrap_or_else(random_seed), 8)
    }

    /// 16-bit generator; `None` picks a random seed.
    pub fn bit16(seed: Option<f64>) -> Self {
        Self::new(seed.unwrap_or_else(random_seed), 16)
    }

    /// 32-bit generator; `None` picks a random seed.
    pub fn bit32(seed: Option<f64>) -> Self {
        Self::new(seed.unwrap_or_else(random_seed), 32)
    }

    /// Widest (52-bit) generator; `None` picks a random seed.
    pub fn bit_max(seed: Option<f64>) -> Self {
        Self::new(seed.unwrap_or_else(random_seed), MAX_BIT_LENGTH)
    }

    /// The clamped whole-number seed this generator restarts from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    /// `2^bit_length`; every `next()` output is a multiple of `1 / max_number`.
    pub fn max_number(&self) -> u64 {
        self.max_number
    }

    /// Restart the sequence from the seed.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }

    /// Generate the next value in [0, 1).
    ///
    /// Clocks the register `bit_length` times. Each clock shifts the low bit
    /// into the output word and feeds back the XOR of register bits
    /// {0, 1, 2, 3, 5} into the top bit.
    pub fn next(&mut self) -> f64 {
        let top = self.bit_length - 1;
        let mut num: u64 = 0;
        let mut state = self.state;

        for _ in 0..self.bit_length {
            num = (num << 1) | (state & 1);

            let feedback = (state ^ (state >> 1) ^ (state >> 2) ^ (state >> 3) ^ (state >> 5)) & 1;
            state = (state >> 1) | (feedback << top);
        }

        self.state = state;
        num as f64 / self.max_number as f64
    }

    /// Uniform value between `min` and `max`.
    ///
    /// `min > max` is allowed and yields a descending range.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        let roll = self.next();
        roll * (max - min) + min
    }

    /// `range(min, max)` rounded half away from zero. Either endpoint can be
    /// returned.
    pub fn range_i(&mut self, min: f64, max: f64) -> i64 {
        self.range(min, max).round() as i64
    }

    /// Draw an index into a collection of `len` items.
    ///
    /// Uses `range_i(0, len)`; a roll of exactly `len` wraps to 0, which gives
    /// every index the same share of the unit interval. Returns `None` for an
    /// empty collection without consuming a value.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let roll = self.range_i(0.0, len as f64);
        Some(roll as usize % len)
    }
}

/// A fresh fractional seed in [0, 1) from OS entropy.
///
/// Fractional seeds are scaled by the generator's `max_number`, so the same
/// value is meaningful for any bit length.
pub fn random_seed() -> f64 {
    rand::random::<f64>()
}
