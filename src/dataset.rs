//! Source datasets shared read-only by every run of a session.

use rand::Rng;
use std::ops::Deref;
use std::sync::Arc;

/// Largest value a session accepts.
///
/// Counting sort allocates one bucket per value between the minimum and the
/// maximum, so the value range has to stay small.
pub const MAX_VALUE: u32 = 1 << 16;

/// Immutable sequence of positive values.
///
/// Cloning is cheap; runs take their own working copy with [`Dataset::to_vec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    values: Arc<[u32]>,
}

impl Dataset {
    /// Wrap existing values.
    ///
    /// Values above [`MAX_VALUE`] are accepted here but rejected when a
    /// session starts.
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Draw `size` uniform values in `1..=max_value`
    pub fn generate<R: Rng>(size: usize, max_value: u32, rng: &mut R) -> Self {
        let max_value = max_value.clamp(1, MAX_VALUE);
        let values: Vec<u32> = (0..size).map(|_| rng.gen_range(1..=max_value)).collect();
        Self::new(values)
    }

    /// Private working copy for one run
    pub fn to_vec(&self) -> Vec<u32> {
        self.values.to_vec()
    }

    /// Largest value, if any
    pub fn max_value(&self) -> Option<u32> {
        self.values.iter().copied().max()
    }

    /// Whether the values are already in ascending order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Deref for Dataset {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.values
    }
}

impl From<Vec<u32>> for Dataset {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}
