//! Block cleaning: gap-cluster removal, divergent-window removal and the
//! interval machinery both passes share.
//!
//! Filters never modify their input. Each returns fresh sub-blocks cut from
//! the block it was given, with empty pieces dropped.

mod divergence;
mod gap;
mod interval;
mod run_length;
mod split;

pub use divergence::{divergent_windows, filter_divergent, DEFAULT_FILTERING_WINDOW, OUTLIER_FOLD};
pub use gap::{filter_gaps, gap_runs, GAP_SYMBOL, MIN_GAP_RUN};
pub use interval::{merge_intervals, RemovalInterval};
pub use run_length::{scan_runs, SymbolRun};
pub use split::split_block;
