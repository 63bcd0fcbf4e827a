//! Two-round cleaning of a pairwise alignment followed by the spectrum.
//!
//! Round one cuts gap clusters and measures a provisional divergence rate.
//! Round two uses that rate to cut divergent windows from the gap-filtered
//! blocks and re-measures. The spectrum is computed from what survives.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::alignment::{
    AlignedBlock, AlignmentLoader, ConcatenatedAlignment, LoadError, LoadedAlignment,
};
use crate::filtering::{filter_divergent, filter_gaps, DEFAULT_FILTERING_WINDOW};
use crate::statistics::CumulativeSpectrum;

/// Default minimum length a sub-block must exceed to be kept.
pub const DEFAULT_MIN_BLOCK_SIZE: usize = 1000;

/// Errors surfaced by the spectrum pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The alignment could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A filtering pass left no sub-block above the size threshold.
    #[error("no blocks longer than {min_block_size} columns survived {stage}")]
    EmptyAlignment {
        /// Pass that eliminated every block.
        stage: &'static str,
        /// Length threshold in force.
        min_block_size: usize,
    },

    /// Configuration values are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Parameters for the spectrum pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Sub-blocks must be strictly longer than this to be kept.
    pub min_block_size: usize,
    /// Window length for divergent-window filtering.
    pub filtering_window: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
            filtering_window: DEFAULT_FILTERING_WINDOW,
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with explicit thresholds.
    pub fn new(min_block_size: usize, filtering_window: usize) -> Self {
        Self {
            min_block_size,
            filtering_window,
        }
    }

    /// Override the minimum sub-block length.
    pub fn with_min_block_size(mut self, min_block_size: usize) -> Self {
        self.min_block_size = min_block_size;
        self
    }

    /// Override the divergence filtering window.
    pub fn with_filtering_window(mut self, filtering_window: usize) -> Self {
        self.filtering_window = filtering_window;
        self
    }

    /// Reject configurations the filters cannot run with.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.filtering_window == 0 {
            return Err(PipelineError::InvalidConfig(
                "filtering window must be at least one column".to_string(),
            ));
        }
        Ok(())
    }
}

/// Block counts and divergence after one filtering round.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PassSummary {
    /// Blocks handed to the filter.
    pub blocks_in: usize,
    /// Sub-blocks kept after filtering and the size threshold.
    pub blocks_out: usize,
    /// Columns in the concatenated survivors, fillers included.
    pub alignment_length: usize,
    /// Mismatch fraction of the concatenated survivors.
    pub divergence: f64,
}

/// Output of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpectrumResult {
    /// Identical-window survival spectrum of the cleaned alignment.
    pub spectrum: CumulativeSpectrum,
    /// Baseline divergence rate after the second round.
    pub divergence: f64,
    /// Sum of sequence-1 payload lengths before filtering.
    pub raw_length: usize,
    /// Gap-filtering round.
    pub gap_pass: PassSummary,
    /// Divergence-filtering round.
    pub divergence_pass: PassSummary,
}

impl SpectrumResult {
    /// Split into the `(spectrum, baseline divergence)` pair.
    pub fn into_parts(self) -> (CumulativeSpectrum, f64) {
        (self.spectrum, self.divergence)
    }
}

/// Runs gap filtering, divergence filtering and the spectrum computation.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline, validating the configuration.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load the alignment at `path` and compute its spectrum.
    pub fn run<P: AsRef<Path>>(&self, path: P) -> Result<SpectrumResult, PipelineError> {
        let alignment = AlignmentLoader::load(path)?;
        self.run_alignment(&alignment)
    }

    /// Compute the spectrum of an already loaded alignment.
    pub fn run_alignment(
        &self,
        alignment: &LoadedAlignment,
    ) -> Result<SpectrumResult, PipelineError> {
        let min_block_size = self.config.min_block_size;

        let gap_filtered = self.keep_long(alignment.blocks.iter().flat_map(filter_gaps));
        let (_, gap_pass) =
            summarize(alignment.blocks.len(), &gap_filtered, "gap filtering", min_block_size)?;
        info!(
            blocks_in = gap_pass.blocks_in,
            blocks_out = gap_pass.blocks_out,
            divergence = gap_pass.divergence,
            "gap filtering complete"
        );

        let window = self.config.filtering_window;
        let reference_rate = gap_pass.divergence;
        let final_blocks = self.keep_long(
            gap_filtered
                .iter()
                .flat_map(|block| filter_divergent(block, reference_rate, window)),
        );
        let (concatenated, divergence_pass) = summarize(
            gap_filtered.len(),
            &final_blocks,
            "divergence filtering",
            min_block_size,
        )?;
        info!(
            blocks_in = divergence_pass.blocks_in,
            blocks_out = divergence_pass.blocks_out,
            divergence = divergence_pass.divergence,
            "divergence filtering complete"
        );

        let runs = concatenated.identical_run_lengths();
        debug!(runs = runs.len(), "collected identical runs");
        let spectrum = CumulativeSpectrum::from_run_lengths(&runs, concatenated.len());

        Ok(SpectrumResult {
            spectrum,
            divergence: divergence_pass.divergence,
            raw_length: alignment.raw_length,
            gap_pass,
            divergence_pass,
        })
    }

    fn keep_long<I>(&self, blocks: I) -> Vec<AlignedBlock>
    where
        I: IntoIterator<Item = AlignedBlock>,
    {
        blocks
            .into_iter()
            .filter(|block| block.len() > self.config.min_block_size)
            .collect()
    }
}

fn summarize(
    blocks_in: usize,
    survivors: &[AlignedBlock],
    stage: &'static str,
    min_block_size: usize,
) -> Result<(ConcatenatedAlignment, PassSummary), PipelineError> {
    let concatenated = ConcatenatedAlignment::from_blocks(survivors).ok_or(
        PipelineError::EmptyAlignment {
            stage,
            min_block_size,
        },
    )?;
    let summary = PassSummary {
        blocks_in,
        blocks_out: survivors.len(),
        alignment_length: concatenated.len(),
        divergence: concatenated.divergence_rate(),
    };
    Ok((concatenated, summary))
}

/// Compute the identical-window spectrum and baseline divergence of the
/// alignment file at `path`.
pub fn identical_window_spectrum<P: AsRef<Path>>(
    path: P,
    config: &PipelineConfig,
) -> Result<SpectrumResult, PipelineError> {
    Pipeline::new(*config)?.run(path)
}
