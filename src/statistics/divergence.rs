/// Number of columns where `first` and `second` differ.
///
/// Columns are compared position by position; no alignment search is done.
/// Only the overlapping prefix is compared when lengths differ.
pub fn mismatch_count(first: &[u8], second: &[u8]) -> usize {
    if first == second {
        return 0;
    }
    first.iter().zip(second).filter(|(a, b)| a != b).count()
}

/// Fraction of columns that mismatch, or 0 for empty input.
pub fn divergence_rate(first: &[u8], second: &[u8]) -> f64 {
    if first.is_empty() {
        return 0.0;
    }
    mismatch_count(first, second) as f64 / first.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences_have_no_mismatches() {
        assert_eq!(mismatch_count(b"ACGT-A", b"ACGT-A"), 0);
        assert_eq!(divergence_rate(b"ACGT-A", b"ACGT-A"), 0.0);
    }

    #[test]
    fn gaps_count_as_mismatches() {
        assert_eq!(mismatch_count(b"AC-T", b"ACGA"), 2);
        assert!((divergence_rate(b"AC-T", b"ACGA") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(mismatch_count(b"acgt", b"ACGT"), 4);
    }
}
