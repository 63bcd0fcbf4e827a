/// Maximal run of one repeated symbol within a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRun {
    /// Repeated byte.
    pub symbol: u8,
    /// Number of consecutive repeats (always ≥ 1).
    pub len: usize,
    /// Offset of the first repeat.
    pub start: usize,
}

impl SymbolRun {
    /// Offset one past the last repeat.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Run-length encode `sequence` left to right with explicit start offsets.
///
/// The runs tile the sequence exactly: no gaps, no overlaps.
pub fn scan_runs(sequence: &[u8]) -> Vec<SymbolRun> {
    let mut runs: Vec<SymbolRun> = Vec::new();
    for (offset, &symbol) in sequence.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.symbol == symbol => run.len += 1,
            _ => runs.push(SymbolRun {
                symbol,
                len: 1,
                start: offset,
            }),
        }
    }
    runs
}
