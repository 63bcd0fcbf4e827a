use crate::statistics::{divergence_rate, identical_run_lengths, mismatch_count};

/// Byte placed between first-sequence pieces when concatenating blocks.
pub const FIRST_FILLER: u8 = b'1';
/// Byte placed between second-sequence pieces when concatenating blocks.
pub const SECOND_FILLER: u8 = b'0';

/// One aligned segment: two equal-length sequences sharing a coordinate space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedBlock {
    first: Vec<u8>,
    second: Vec<u8>,
}

impl AlignedBlock {
    /// Construct a block, returning `None` when the sequence lengths differ.
    pub fn new(first: impl Into<Vec<u8>>, second: impl Into<Vec<u8>>) -> Option<Self> {
        let first = first.into();
        let second = second.into();
        (first.len() == second.len()).then_some(Self { first, second })
    }

    /// Build a block from two slices of the same parent block.
    pub(crate) fn from_parts(first: &[u8], second: &[u8]) -> Self {
        debug_assert_eq!(first.len(), second.len());
        Self {
            first: first.to_vec(),
            second: second.to_vec(),
        }
    }

    /// Sequence 1 of the pair.
    pub fn first(&self) -> &[u8] {
        &self.first
    }

    /// Sequence 2 of the pair.
    pub fn second(&self) -> &[u8] {
        &self.second
    }

    /// Number of aligned columns.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Returns true when the block has no columns.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Whether both sequences agree at every column.
    pub fn is_identical(&self) -> bool {
        self.first == self.second
    }
}

/// Raw blocks read from an alignment file, before any filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedAlignment {
    /// Two-sequence blocks in file order.
    pub blocks: Vec<AlignedBlock>,
    /// Sum of sequence-1 payload lengths.
    pub raw_length: usize,
}

/// Blocks joined end to end, with one synthetic mismatch at every boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatenatedAlignment {
    first: Vec<u8>,
    second: Vec<u8>,
}

impl ConcatenatedAlignment {
    /// Join `blocks` with [`FIRST_FILLER`]/[`SECOND_FILLER`] between neighbours.
    ///
    /// Returns `None` for an empty block set.
    pub fn from_blocks(blocks: &[AlignedBlock]) -> Option<Self> {
        if blocks.is_empty() {
            return None;
        }
        let total = blocks.iter().map(AlignedBlock::len).sum::<usize>() + blocks.len() - 1;
        let mut first = Vec::with_capacity(total);
        let mut second = Vec::with_capacity(total);

        for (idx, block) in blocks.iter().enumerate() {
            if idx > 0 {
                first.push(FIRST_FILLER);
                second.push(SECOND_FILLER);
            }
            first.extend_from_slice(block.first());
            second.extend_from_slice(block.second());
        }

        Some(Self { first, second })
    }

    /// Concatenated sequence 1.
    pub fn first(&self) -> &[u8] {
        &self.first
    }

    /// Concatenated sequence 2.
    pub fn second(&self) -> &[u8] {
        &self.second
    }

    /// Total number of columns, fillers included.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Returns true when no columns are present.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Columns where the two sequences disagree.
    pub fn mismatch_count(&self) -> usize {
        mismatch_count(&self.first, &self.second)
    }

    /// Global mismatch fraction.
    pub fn divergence_rate(&self) -> f64 {
        divergence_rate(&self.first, &self.second)
    }

    /// Lengths of all maximal mismatch-free runs, left to right.
    pub fn identical_run_lengths(&self) -> Vec<usize> {
        identical_run_lengths(&self.first, &self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_rejects_unequal_lengths() {
        assert!(AlignedBlock::new("ACGT", "ACG").is_none());
        let block = AlignedBlock::new("ACGT", "ACGA").unwrap();
        assert_eq!(block.len(), 4);
        assert!(!block.is_identical());
    }

    #[test]
    fn concatenation_inserts_one_mismatch_per_boundary() {
        let blocks = vec![
            AlignedBlock::new("AAAA", "AAAA").unwrap(),
            AlignedBlock::new("CCC", "CCC").unwrap(),
            AlignedBlock::new("GG", "GT").unwrap(),
        ];
        let concat = ConcatenatedAlignment::from_blocks(&blocks).unwrap();
        assert_eq!(concat.first(), b"AAAA1CCC1GG");
        assert_eq!(concat.second(), b"AAAA0CCC0GT");
        assert_eq!(concat.len(), 11);
        assert_eq!(concat.mismatch_count(), 3);
    }

    #[test]
    fn empty_block_set_has_no_concatenation() {
        assert!(ConcatenatedAlignment::from_blocks(&[]).is_none());
    }
}
