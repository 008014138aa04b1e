//! Array growth configuration.

use crate::error::ArrayConfigError;

/// Growth multiplier applied when an `insert` finds the array full.
pub const SIZE_RATIO: usize = 3;

/// How `push` sizes its reallocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PushGrowth {
    /// Reallocate to exactly `len + 1` on every push.
    ///
    /// No slack is kept, so each push copies the whole array: O(n) per
    /// push. This is the reference behaviour and the default.
    #[default]
    Exact,
    /// Reallocate to `(len + 1) * size_ratio` only when `len >= capacity`.
    ///
    /// Amortized O(1) per push.
    Geometric,
}

/// Configuration for [`DynamicArray`](crate::DynamicArray).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Reallocation policy for `push`.
    pub push_growth: PushGrowth,
    /// Capacity multiplier for geometric growth. Must be at least 2.
    pub size_ratio: usize,
}

impl ArrayConfig {
    /// Reference configuration: exact push growth, ratio [`SIZE_RATIO`].
    pub fn new() -> Self {
        Self {
            push_growth: PushGrowth::Exact,
            size_ratio: SIZE_RATIO,
        }
    }

    /// Geometric growth on both `push` and `insert`.
    pub fn geometric() -> Self {
        Self {
            push_growth: PushGrowth::Geometric,
            ..Self::new()
        }
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ArrayConfigError> {
        if self.size_ratio < 2 {
            return Err(ArrayConfigError::SizeRatioTooSmall {
                configured: self.size_ratio,
            });
        }
        Ok(())
    }

    /// Capacity to grow to when `len` elements are live and one more is
    /// needed.
    pub(crate) fn geometric_target(&self, len: usize) -> usize {
        (len + 1).saturating_mul(self.size_ratio)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
