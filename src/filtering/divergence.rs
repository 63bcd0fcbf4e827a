use crate::alignment::AlignedBlock;
use crate::statistics::mismatch_count;

use super::interval::RemovalInterval;
use super::split::split_block;

/// Default window length for local divergence filtering.
pub const DEFAULT_FILTERING_WINDOW: usize = 1000;

/// Local divergence, as a multiple of the reference rate, at which a window is cut.
pub const OUTLIER_FOLD: f64 = 10.0;

/// Windows of `block` whose local mismatch rate reaches the outlier threshold.
///
/// Windows are non-overlapping and start at column 0. A trailing partial
/// window is judged on its own length. A zero `window` treats the whole
/// block as one window.
pub fn divergent_windows(
    block: &AlignedBlock,
    reference_rate: f64,
    window: usize,
) -> Vec<RemovalInterval> {
    let threshold = OUTLIER_FOLD * reference_rate;
    let len = block.len();
    let mut removals = Vec::new();
    let mut begin = 0usize;

    let mut judge = |begin: usize, end: usize| {
        let mismatches = mismatch_count(&block.first()[begin..end], &block.second()[begin..end]);
        if mismatches as f64 / (end - begin) as f64 >= threshold {
            removals.push(RemovalInterval::new(begin, end));
        }
    };

    if window > 0 {
        while begin + window < len {
            judge(begin, begin + window);
            begin += window;
        }
    }
    if begin < len {
        judge(begin, len);
    }

    removals
}

/// Cut windows diverging at least [`OUTLIER_FOLD`]× `reference_rate` out of
/// `block`, keeping the non-empty pieces.
///
/// Identical blocks are returned unchanged without scanning.
pub fn filter_divergent(
    block: &AlignedBlock,
    reference_rate: f64,
    window: usize,
) -> Vec<AlignedBlock> {
    if block.is_identical() {
        return vec![block.clone()];
    }

    let removals = divergent_windows(block, reference_rate, window);
    split_block(block, &removals)
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect()
}
