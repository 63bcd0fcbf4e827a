//! Divergence estimation, identical-window spectra and the mutation-only
//! null model they are compared against.

mod divergence;
mod null_model;
mod spectrum;

pub use divergence::{divergence_rate, mismatch_count};
pub use null_model::{null_model_curve, null_model_survival};
pub use spectrum::{identical_run_lengths, CumulativeSpectrum};
