//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use length_bias::filtering::{filter_divergent, filter_gaps};
use length_bias::{AlignedBlock, LoadedAlignment, Pipeline, PipelineConfig};

/// Deterministic block with a mismatch every `spacing` columns and a gap
/// cluster every `gap_every` columns.
fn synthetic_block(len: usize, spacing: usize, gap_every: usize, offset: usize) -> AlignedBlock {
    let second: Vec<u8> = (0..len).map(|i| b"ACGT"[(i + offset) % 4]).collect();
    let mut first = second.clone();
    for i in (spacing / 2..len).step_by(spacing) {
        first[i] = if first[i] == b'A' { b'C' } else { b'A' };
    }
    for i in (gap_every..len.saturating_sub(3)).step_by(gap_every) {
        first[i..i + 3].copy_from_slice(b"---");
    }
    AlignedBlock::new(first, second).expect("equal lengths")
}

fn synthetic_alignment(blocks: usize, len: usize) -> LoadedAlignment {
    let blocks: Vec<AlignedBlock> = (0..blocks)
        .map(|i| synthetic_block(len, 97 + i % 5, 4_000, i))
        .collect();
    let raw_length = blocks.iter().map(AlignedBlock::len).sum();
    LoadedAlignment { blocks, raw_length }
}

fn benchmark_filters(c: &mut Criterion) {
    let block = synthetic_block(100_000, 89, 5_000, 0);

    c.bench_function("filter_gaps_100k", |b| {
        b.iter(|| black_box(filter_gaps(black_box(&block))));
    });
    c.bench_function("filter_divergent_100k", |b| {
        b.iter(|| black_box(filter_divergent(black_box(&block), 0.001, 1000)));
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let alignment = synthetic_alignment(50, 20_000);
    let pipeline = Pipeline::new(PipelineConfig::default()).expect("valid config");

    c.bench_function("pipeline_1m_columns", |b| {
        b.iter(|| {
            black_box(
                pipeline
                    .run_alignment(black_box(&alignment))
                    .expect("pipeline succeeds"),
            )
        });
    });
}

criterion_group!(benches, benchmark_filters, benchmark_pipeline);
criterion_main!(benches);
