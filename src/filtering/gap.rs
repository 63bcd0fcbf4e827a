use crate::alignment::AlignedBlock;

use super::interval::RemovalInterval;
use super::run_length::scan_runs;
use super::split::split_block;

/// Alignment symbol for an insertion or deletion.
pub const GAP_SYMBOL: u8 = b'-';

/// Shortest gap run that is cut out of a block.
pub const MIN_GAP_RUN: usize = 2;

/// Removal intervals covering every run of at least [`MIN_GAP_RUN`] gaps.
pub fn gap_runs(sequence: &[u8]) -> Vec<RemovalInterval> {
    scan_runs(sequence)
        .into_iter()
        .filter(|run| run.symbol == GAP_SYMBOL && run.len >= MIN_GAP_RUN)
        .map(|run| RemovalInterval::new(run.start, run.end()))
        .collect()
}

/// Cut gap clusters out of `block`, keeping the non-empty pieces.
///
/// Runs from both sequences are pooled before splitting, so a cluster in
/// either sequence removes the corresponding columns of both.
pub fn filter_gaps(block: &AlignedBlock) -> Vec<AlignedBlock> {
    let mut removals = gap_runs(block.first());
    removals.extend(gap_runs(block.second()));

    split_block(block, &removals)
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect()
}
