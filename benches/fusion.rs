use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rankfuse::fusion::{reciprocal_rank_fusion, DEFAULT_RRF_K};
use rankfuse::types::{ResultList, ScoredChunk};

/// Build `lists` result lists of `hits` chunks each, with partial overlap
/// between neighbouring sources so dedup does real work.
fn synthetic_lists(lists: usize, hits: usize) -> Vec<ResultList> {
    (0..lists)
        .map(|l| {
            (0..hits)
                .map(|h| {
                    let doc = h + l * hits * 7 / 10;
                    ScoredChunk::new(format!("chunk-{doc}"), Some(1.0 / (h as f32 + 1.0)))
                })
                .collect()
        })
        .collect()
}

fn bench_rrf(c: &mut Criterion) {
    let small = synthetic_lists(4, 100);
    c.bench_function("rrf_4x100", |b| {
        b.iter(|| reciprocal_rank_fusion(black_box(&small), DEFAULT_RRF_K).unwrap())
    });

    let large = synthetic_lists(8, 500);
    c.bench_function("rrf_8x500", |b| {
        b.iter(|| reciprocal_rank_fusion(black_box(&large), DEFAULT_RRF_K).unwrap())
    });
}

criterion_group!(benches, bench_rrf);
criterion_main!(benches);
