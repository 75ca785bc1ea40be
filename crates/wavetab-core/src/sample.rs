//! Sample and stereo frame types.

/// One PCM amplitude value as parsed from a header.
///
/// Headers declare `int16_t` arrays, but the value is kept wider so that a
/// literal is never silently wrapped while parsing.
pub type Sample = i32;

/// A synchronized left/right sample pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StereoFrame {
    /// Left channel sample.
    pub left: Sample,
    /// Right channel sample.
    pub right: Sample,
}

impl StereoFrame {
    /// Creates a frame from its two channel samples.
    pub fn new(left: Sample, right: Sample) -> Self {
        Self { left, right }
    }

    /// Averages two frames channel by channel, rounding toward negative
    /// infinity.
    pub fn average(self, other: Self) -> Self {
        Self {
            left: floor_mean(self.left, other.left),
            right: floor_mean(self.right, other.right),
        }
    }
}

/// Floor of the mean of two samples.
///
/// The sum is formed in `i64` and the result always lies between `a` and
/// `b`, so it fits back into a [`Sample`].
pub fn floor_mean(a: Sample, b: Sample) -> Sample {
    (i64::from(a) + i64::from(b)).div_euclid(2) as Sample
}
