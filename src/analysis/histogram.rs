//! Quantized duration histogram rendering.
//!
//! Maps each duration to one of a fixed number of equal-width buckets
//! across the observed range, then renders bucket counts as block glyphs
//! normalized against the fullest bucket. Purely visual and lossy; no raw
//! durations are recoverable from the output.

use crate::utils::config::{BLOCKS, DISTRIBUTION_WIDTH};
use std::time::Duration;

/// Fixed-width bucket counts for a set of durations
#[derive(Debug, Clone)]
pub struct Histogram {
    counts: [usize; DISTRIBUTION_WIDTH],
}

impl Histogram {
    /// Build the histogram by quantizing each duration into a bucket
    ///
    /// When the duration range is zero (all durations identical), every
    /// event is assigned the midpoint position 0.5 rather than dividing
    /// by zero, producing a single center spike.
    pub fn from_durations(durations: &[Duration]) -> Self {
        let mut counts = [0usize; DISTRIBUTION_WIDTH];

        if let (Some(&min), Some(&max)) = (durations.iter().min(), durations.iter().max()) {
            let range_seconds = (max - min).as_secs_f64();
            for &duration in durations {
                counts[bucket_index(duration, min, range_seconds)] += 1;
            }
        }

        Self { counts }
    }

    /// Per-bucket event counts, in bucket order
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Render the histogram as one glyph per bucket
    ///
    /// Counts are normalized by the maximum bucket count, so the fullest
    /// bucket always renders at full visual weight.
    pub fn render(&self) -> String {
        let max_count = self.counts.iter().copied().max().unwrap_or(0);
        if max_count == 0 {
            return BLOCKS[0].to_string().repeat(DISTRIBUTION_WIDTH);
        }

        self.counts
            .iter()
            .map(|&count| {
                let normalized = count as f64 / max_count as f64;
                BLOCKS[(normalized * (BLOCKS.len() - 1) as f64).round() as usize]
            })
            .collect()
    }
}

/// Quantize a duration into a bucket index in `[0, DISTRIBUTION_WIDTH - 1]`
///
/// The normalized position lies in [0, 1] by construction (0.5 for a
/// zero-range input), so the rounded index never needs clamping.
fn bucket_index(duration: Duration, min: Duration, range_seconds: f64) -> usize {
    let position = if range_seconds > 0.0 {
        (duration - min).as_secs_f64() / range_seconds
    } else {
        0.5
    };
    (position * (DISTRIBUTION_WIDTH - 1) as f64).round() as usize
}
