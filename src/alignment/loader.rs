use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::{AlignedBlock, LoadedAlignment};

/// Substring that marks the header of a block with exactly two sequences.
pub const PAIRWISE_BLOCK_MARKER: &str = "mult=2";

/// Errors surfaced while reading an alignment file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The alignment file could not be opened.
    #[error("failed to open alignment {path}: {source}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading a line failed part way through the file.
    #[error("failed to read alignment: {0}")]
    Read(#[from] std::io::Error),

    /// A pairwise block header or its data lines were malformed or truncated.
    #[error("malformed alignment at line {line}: {message}")]
    Format {
        /// 1-based line number of the offending line.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// The two payloads of a pairwise block have different lengths.
    #[error("sequence length mismatch at line {line}: {first} vs {second}")]
    LengthMismatch {
        /// 1-based line number of the block header.
        line: usize,
        /// Length of the sequence-1 payload.
        first: usize,
        /// Length of the sequence-2 payload.
        second: usize,
    },
}

/// Reads pairwise blocks out of a MAF-style text alignment.
///
/// Any line containing [`PAIRWISE_BLOCK_MARKER`] opens a block; the next two
/// lines hold sequence 1 and sequence 2, each payload being the last
/// whitespace-delimited token. Every other line is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentLoader;

impl AlignmentLoader {
    /// Load every pairwise block from the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadedAlignment, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let alignment = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            blocks = alignment.blocks.len(),
            raw_length = alignment.raw_length,
            "loaded alignment"
        );
        Ok(alignment)
    }

    /// Parse pairwise blocks from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<LoadedAlignment, LoadError> {
        let mut lines = reader.lines().enumerate();
        let mut alignment = LoadedAlignment::default();

        while let Some((idx, line)) = lines.next() {
            let line = line?;
            if !line.contains(PAIRWISE_BLOCK_MARKER) {
                continue;
            }
            let header_line = idx + 1;

            let first = next_payload(&mut lines, header_line, "sequence 1")?;
            let second = next_payload(&mut lines, header_line, "sequence 2")?;
            let (first_len, second_len) = (first.len(), second.len());

            let block =
                AlignedBlock::new(first, second).ok_or(LoadError::LengthMismatch {
                    line: header_line,
                    first: first_len,
                    second: second_len,
                })?;
            debug!(line = header_line, len = block.len(), "read pairwise block");

            alignment.raw_length += block.len();
            alignment.blocks.push(block);
        }

        Ok(alignment)
    }
}

fn next_payload<I>(lines: &mut I, header_line: usize, which: &str) -> Result<Vec<u8>, LoadError>
where
    I: Iterator<Item = (usize, std::io::Result<String>)>,
{
    let (idx, line) = lines.next().ok_or_else(|| LoadError::Format {
        line: header_line,
        message: format!("block header is missing the {which} line"),
    })?;
    let line = line?;

    line.split_whitespace()
        .last()
        .map(|token| token.as_bytes().to_vec())
        .ok_or_else(|| LoadError::Format {
            line: idx + 1,
            message: format!("{which} line has no sequence token"),
        })
}
