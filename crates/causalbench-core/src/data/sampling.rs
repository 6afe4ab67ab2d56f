//! Bootstrap resampling with per-frame deterministic seeds.
//!
//! Seed rule: the frame at `frame_index` of replicate `replicate` is drawn
//! with seed `replicate * frame_count + frame_index`. Every (replicate,
//! frame) pair gets its own stream, and ChaCha8 keeps the streams identical
//! across platforms and releases.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::Frame;
use crate::errors::DataError;

/// How many rows to draw from one frame.
///
/// Serialized untagged: an integer is a count, a float is a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleSize {
    /// Exactly this many rows. Must be greater than 1.
    Count(usize),
    /// `round(fraction × frame length)` rows. Must lie in (0, 1].
    Fraction(f64),
}

impl SampleSize {
    pub fn validate(&self) -> Result<(), DataError> {
        let ok = match *self {
            SampleSize::Count(n) => n > 1,
            SampleSize::Fraction(f) => f.is_finite() && f > 0.0 && f <= 1.0,
        };
        if ok {
            Ok(())
        } else {
            Err(DataError::InvalidSampleSize {
                value: self.to_string(),
            })
        }
    }

    /// Number of rows to draw from a frame of `len` rows.
    /// Fractions round half to even.
    pub fn resolve(&self, len: usize) -> usize {
        match *self {
            SampleSize::Count(n) => n,
            SampleSize::Fraction(f) => (f * len as f64).round_ties_even() as usize,
        }
    }
}

impl fmt::Display for SampleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleSize::Count(n) => write!(f, "{n} rows"),
            SampleSize::Fraction(x) => write!(f, "fraction {x}"),
        }
    }
}

/// Seed for one frame of one replicate.
pub fn replicate_seed(replicate: usize, frame_index: usize, frame_count: usize) -> u64 {
    (replicate as u64)
        .wrapping_mul(frame_count as u64)
        .wrapping_add(frame_index as u64)
}

/// Draw one bootstrap sample (with replacement) from every frame.
///
/// Identical inputs and `replicate` always give identical output.
pub fn bootstrap_sample(
    frames: &[Frame],
    sizes: &[SampleSize],
    replicate: usize,
) -> Result<Vec<Frame>, DataError> {
    if frames.is_empty() {
        return Err(DataError::NoFrames);
    }
    if frames.len() != sizes.len() {
        return Err(DataError::SampleSizeCountMismatch {
            sizes: sizes.len(),
            frames: frames.len(),
        });
    }

    frames
        .iter()
        .zip(sizes)
        .enumerate()
        .map(|(index, (frame, size))| {
            size.validate()?;
            let n = size.resolve(frame.nrows());
            if n > 0 && frame.is_empty() {
                return Err(DataError::EmptyFrame { index });
            }
            let mut rng =
                ChaCha8Rng::seed_from_u64(replicate_seed(replicate, index, frames.len()));
            let indices: Vec<usize> = (0..n).map(|_| rng.gen_range(0..frame.nrows())).collect();
            Ok(frame.take_rows(&indices))
        })
        .collect()
}
