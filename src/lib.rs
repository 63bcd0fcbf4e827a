//! # Identical-Window Spectrum of Pairwise Alignments
//!
//! This library measures length-biased similarity between two genomes, the
//! signature left by horizontal transfer or recent recombination, against a
//! null model of point mutation alone.
//!
//! ## Pipeline
//!
//! 1. **Load**: read every two-sequence block from a MAF-style alignment
//! 2. **Gap filtering**: cut runs of two or more gaps, drop short pieces
//! 3. **Baseline**: concatenate survivors, measure the mismatch rate
//! 4. **Divergence filtering**: cut windows ≥ 10× the baseline, drop short pieces
//! 5. **Re-estimate**: measure the mismatch rate of the final survivors
//! 6. **Spectrum**: fraction of identical-run mass in runs longer than `w`
//!
//! ## Usage Example
//!
//! ```ignore
//! use length_bias::{identical_window_spectrum, null_model_curve, PipelineConfig};
//!
//! let result = identical_window_spectrum("pair.maf", &PipelineConfig::default())?;
//! let expected = null_model_curve(result.spectrum.len(), result.divergence);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - leaves first
pub mod alignment;  // Block types, concatenation and the file loader
pub mod filtering;  // Gap and divergence filters over removal intervals
pub mod statistics; // Divergence, identical-run spectrum, null model
pub mod pipeline;   // Two-round orchestration

// Re-exports for convenience
pub use alignment::{
    AlignedBlock, AlignmentLoader, ConcatenatedAlignment, LoadError, LoadedAlignment,
};
pub use filtering::RemovalInterval;
pub use pipeline::{
    identical_window_spectrum, PassSummary, Pipeline, PipelineConfig, PipelineError,
    SpectrumResult,
};
pub use statistics::{null_model_curve, null_model_survival, CumulativeSpectrum};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectrum_and_null_model_agree_in_shape() {
        let spectrum = CumulativeSpectrum::from_run_lengths(&[4, 4], 10);
        let null = null_model_curve(spectrum.len(), 0.2);
        assert_eq!(spectrum.len(), null.len());
        assert_eq!(null[0], 1.0);
        assert_eq!(spectrum.value_at(0), 1.0);
    }
}
