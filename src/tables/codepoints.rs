// src/tables/codepoints.rs
// Sorted-range codepoint set. The compiled tables describe most classes as
// inclusive ranges; containment is a binary search over merged ranges, which
// keeps the per-codepoint classification O(log n) with tiny constants.

use crate::CodePoint;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodepointSet {
    ranges: Vec<(CodePoint, CodePoint)>,
}

impl CodepointSet {
    pub fn builder() -> CodepointSetBuilder {
        CodepointSetBuilder::default()
    }

    pub fn from_ranges(ranges: &[(CodePoint, CodePoint)]) -> Self {
        let mut b = Self::builder();
        b.add_ranges(ranges);
        b.build()
    }

    #[inline]
    pub fn contains(&self, cp: CodePoint) -> bool {
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if cp < lo {
                    core::cmp::Ordering::Greater
                } else if cp > hi {
                    core::cmp::Ordering::Less
                } else {
                    core::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of codepoints covered.
    pub fn len(&self) -> usize {
        self.ranges
            .iter()
            .map(|&(lo, hi)| (hi - lo + 1) as usize)
            .sum()
    }

    /// Iterate every member in ascending order. Intended for load-time
    /// integrity checks over the small sets, not for hot paths.
    pub fn iter(&self) -> impl Iterator<Item = CodePoint> + '_ {
        self.ranges.iter().flat_map(|&(lo, hi)| lo..=hi)
    }
}

#[derive(Debug, Default)]
pub struct CodepointSetBuilder {
    ranges: Vec<(CodePoint, CodePoint)>,
}

impl CodepointSetBuilder {
    pub fn add(&mut self, cp: CodePoint) {
        self.ranges.push((cp, cp));
    }

    pub fn add_range(&mut self, lo: CodePoint, hi: CodePoint) {
        debug_assert!(lo <= hi);
        self.ranges.push((lo, hi));
    }

    pub fn add_ranges(&mut self, ranges: &[(CodePoint, CodePoint)]) {
        for &(lo, hi) in ranges {
            self.add_range(lo, hi);
        }
    }

    pub fn add_singles(&mut self, cps: &[CodePoint]) {
        for &cp in cps {
            self.add(cp);
        }
    }

    pub fn add_set(&mut self, other: &CodepointSet) {
        self.ranges.extend_from_slice(&other.ranges);
    }

    /// Sort and merge overlapping or adjacent ranges.
    pub fn build(mut self) -> CodepointSet {
        self.ranges.sort_unstable();
        let mut merged: Vec<(CodePoint, CodePoint)> = Vec::with_capacity(self.ranges.len());
        for (lo, hi) in self.ranges {
            match merged.last_mut() {
                Some(last) if lo <= last.1.saturating_add(1) => {
                    last.1 = last.1.max(hi);
                }
                _ => merged.push((lo, hi)),
            }
        }
        CodepointSet { ranges: merged }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_after_merge() {
        let set = CodepointSet::from_ranges(&[(0x61, 0x7A), (0x30, 0x39), (0x7B, 0x7D)]);
        assert!(set.contains(0x61));
        assert!(set.contains(0x35));
        assert!(set.contains(0x7C));
        assert!(!set.contains(0x40));
        assert!(!set.contains(0x7E));
    }

    #[test]
    fn adjacent_ranges_merge() {
        let set = CodepointSet::from_ranges(&[(0x61, 0x6F), (0x70, 0x7A)]);
        assert_eq!(set.ranges.len(), 1);
        assert_eq!(set.len(), 26);
    }

    #[test]
    fn iter_is_ascending_and_complete() {
        let mut b = CodepointSet::builder();
        b.add_range(0x10, 0x12);
        b.add(0x20);
        let set = b.build();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0x10, 0x11, 0x12, 0x20]);
    }

    #[test]
    fn empty_set() {
        let set = CodepointSet::default();
        assert!(set.is_empty());
        assert!(!set.contains(0));
    }
}
