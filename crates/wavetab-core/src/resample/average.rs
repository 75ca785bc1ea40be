//! Fixed 2:1 decimation by averaging adjacent stereo frames.

use crate::sample::{Sample, StereoFrame};

/// Raw samples consumed per output frame: two interleaved stereo frames.
pub const GROUP_LEN: usize = 4;

/// Halves the rate of an interleaved `L, R, L, R, ...` sample sequence.
///
/// Each complete group `(l0, r0, l1, r1)` yields `floor((l0 + l1) / 2)` and
/// `floor((r0 + r1) / 2)`. A trailing group of one to three samples is
/// dropped.
pub fn average_pairs(samples: &[Sample]) -> Vec<Sample> {
    let mut out = Vec::with_capacity(samples.len() / 2);
    for group in samples.chunks_exact(GROUP_LEN) {
        if let [l0, r0, l1, r1] = *group {
            let mixed = StereoFrame::new(l0, r0).average(StereoFrame::new(l1, r1));
            out.push(mixed.left);
            out.push(mixed.right);
        }
    }
    out
}
