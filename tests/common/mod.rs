#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

fn data_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// Path to a fixture under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    data_root().join(name)
}

/// Route library logs to the test harness; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Write `contents` to a scratch file unique to `name`.
pub fn scratch_alignment(name: &str, contents: &str) -> PathBuf {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::write(&path, contents).expect("write scratch alignment");
    path
}

pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{context}: expected {expected}, got {actual}"
    );
}
