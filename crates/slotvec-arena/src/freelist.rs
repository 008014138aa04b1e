//! Freed address ranges available for reuse.
//!
//! Ranges are kept sorted by start address and fully coalesced: no two
//! ranges overlap or touch. Reuse is first-fit; a larger range is split and
//! its tail stays on the list.

/// A run of free addresses `[start, start + len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FreeRange {
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl FreeRange {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Sorted, coalesced list of [`FreeRange`]s.
#[derive(Clone, Debug, Default)]
pub(crate) struct FreeList {
    ranges: Vec<FreeRange>,
}

impl FreeList {
    pub(crate) fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Take `len` addresses from the first range large enough.
    ///
    /// Returns the start address, or `None` if no range fits.
    pub(crate) fn take(&mut self, len: usize) -> Option<usize> {
        debug_assert!(len > 0);
        let pos = self.ranges.iter().position(|r| r.len >= len)?;
        let range = &mut self.ranges[pos];
        let start = range.start;
        if range.len == len {
            self.ranges.remove(pos);
        } else {
            range.start += len;
            range.len -= len;
        }
        Some(start)
    }

    /// Return `[start, start + len)` to the list, merging with neighbours.
    pub(crate) fn release(&mut self, start: usize, len: usize) {
        debug_assert!(len > 0);
        let idx = self.ranges.partition_point(|r| r.start < start);
        let mut range = FreeRange { start, len };

        debug_assert!(idx == 0 || self.ranges[idx - 1].end() <= start);
        debug_assert!(idx == self.ranges.len() || range.end() <= self.ranges[idx].start);

        if idx < self.ranges.len() && range.end() == self.ranges[idx].start {
            range.len += self.ranges[idx].len;
            self.ranges.remove(idx);
        }
        if idx > 0 && self.ranges[idx - 1].end() == range.start {
            self.ranges[idx - 1].len += range.len;
        } else {
            self.ranges.insert(idx, range);
        }
    }

    /// Remove the last range if it ends exactly at `head`.
    ///
    /// Returns its start, which becomes the new head.
    pub(crate) fn pop_tail(&mut self, head: usize) -> Option<usize> {
        match self.ranges.last() {
            Some(last) if last.end() == head => self.ranges.pop().map(|r| r.start),
            _ => None,
        }
    }

    /// Length of the largest range, or 0.
    pub(crate) fn largest(&self) -> usize {
        self.ranges.iter().map(|r| r.len).max().unwrap_or(0)
    }

    pub(crate) fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub(crate) fn total_slots(&self) -> usize {
        self.ranges.iter().map(|r| r.len).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.ranges.clear();
    }

    #[cfg(test)]
    pub(crate) fn ranges(&self) -> &[FreeRange] {
        &self.ranges
    }
}
