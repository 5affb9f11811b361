use autocorrect::{Backend, BkTree, LevenshteinBackend, Trie};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

// Deterministic pseudo-words so runs are comparable without a dictionary file.
fn vocabulary(size: usize) -> Vec<String> {
    const SYLLABLES: [&str; 12] = [
        "ka", "to", "ri", "men", "sal", "or", "ve", "un", "dis", "ing", "pe", "lo",
    ];
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    (0..size)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let syllables = 1 + (seed % 4) as usize;
            (0..syllables)
                .map(|i| SYLLABLES[((seed >> (8 * i)) % SYLLABLES.len() as u64) as usize])
                .collect()
        })
        .collect()
}

fn bench_backends(c: &mut Criterion) {
    let words = vocabulary(20_000);
    let bktree = BkTree::from_words(&words).unwrap();
    let automaton = LevenshteinBackend::new(Arc::new(Trie::from_words(&words)));
    let max_suggestions = 5;

    let mut group = c.benchmark_group("get_suggestions");
    for query in ["kato", "salinng", "dismenve", "xq"] {
        group.bench_with_input(BenchmarkId::new("bk_tree", query), query, |b, q| {
            b.iter(|| bktree.get_suggestions(black_box(q), max_suggestions))
        });
        group.bench_with_input(BenchmarkId::new("automaton", query), query, |b, q| {
            b.iter(|| automaton.get_suggestions(black_box(q), max_suggestions))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let words = vocabulary(5_000);
    c.bench_function("build_bk_tree", |b| {
        b.iter(|| BkTree::from_words(black_box(&words)).unwrap())
    });
    c.bench_function("build_trie", |b| b.iter(|| Trie::from_words(black_box(&words))));
}

criterion_group!(benches, bench_backends, bench_build);
criterion_main!(benches);
