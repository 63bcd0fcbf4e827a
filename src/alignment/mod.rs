//! Pairwise alignment blocks and the text loader that produces them.

mod loader;
mod types;

pub use loader::{AlignmentLoader, LoadError, PAIRWISE_BLOCK_MARKER};
pub use types::{
    AlignedBlock, ConcatenatedAlignment, LoadedAlignment, FIRST_FILLER, SECOND_FILLER,
};
