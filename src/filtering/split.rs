use crate::alignment::AlignedBlock;

use super::interval::{merge_intervals, RemovalInterval};

/// Excise `removals` from `block`, returning every surviving piece in order.
///
/// Pieces are cut between consecutive removals, so adjacent removals yield
/// empty pieces; callers decide whether to keep them. With no removals the
/// block is returned unchanged as the only piece.
pub fn split_block(block: &AlignedBlock, removals: &[RemovalInterval]) -> Vec<AlignedBlock> {
    if removals.is_empty() {
        return vec![block.clone()];
    }

    let merged = merge_intervals(removals);
    let mut pieces = Vec::with_capacity(merged.len() + 1);
    let mut cursor = 0usize;
    for removal in &merged {
        pieces.push(piece(block, cursor, removal.start));
        cursor = removal.end;
    }
    pieces.push(piece(block, cursor, block.len()));
    pieces
}

/// Slice `[from, to)` clamped to the block; an inverted range is empty.
fn piece(block: &AlignedBlock, from: usize, to: usize) -> AlignedBlock {
    let len = block.len();
    let to = to.min(len);
    let from = from.min(to);
    AlignedBlock::from_parts(&block.first()[from..to], &block.second()[from..to])
}
