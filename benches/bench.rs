//! Criterion benchmarks for synocount.
//!
//! Covers single-word adds, contended adds, bulk ingestion and
//! synonym-aware counting over dictionaries of varying size.

use std::hint::black_box;
use std::sync::Arc;
use std::thread;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use synocount::prelude::*;

/// Spell `n` with letters only, so every generated word passes validation.
fn alpha_word(prefix: &str, mut n: usize) -> String {
    let mut word = prefix.to_string();
    loop {
        word.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break word;
        }
    }
}

/// Generate a test corpus cycling through a fixed vocabulary.
fn generate_test_words(count: usize, vocabulary: usize) -> Vec<String> {
    (0..count)
        .map(|i| alpha_word("word", (i * 7) % vocabulary))
        .collect()
}

/// Create a dictionary with `num_groups` groups of three synonyms.
fn create_test_dictionary(num_groups: usize) -> DictionaryTranslator {
    let groups = (0..num_groups)
        .map(|i| {
            vec![
                alpha_word("word", i),
                alpha_word("syna", i),
                alpha_word("synb", i),
            ]
        })
        .collect();
    DictionaryTranslator::from_synonym_groups(groups)
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    let words = generate_test_words(10_000, 500);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("sequential_add", |b| {
        b.iter(|| {
            let counter = WordCounter::new(Arc::new(IdentityTranslator));
            for word in &words {
                counter.add(black_box(word.as_str())).unwrap();
            }
            black_box(counter)
        })
    });

    group.bench_function("bulk_add_all", |b| {
        b.iter(|| {
            let counter = WordCounter::with_config(
                Arc::new(IdentityTranslator),
                WordCounterConfig::default().with_parallel_threshold(0),
            );
            black_box(counter.add_all(black_box(&words)));
            black_box(counter)
        })
    });

    group.bench_function("contended_add_4_threads", |b| {
        b.iter(|| {
            let counter = Arc::new(WordCounter::new(Arc::new(IdentityTranslator)));
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let counter = Arc::clone(&counter);
                    thread::spawn(move || {
                        for _ in 0..2_500 {
                            counter.add("flower").unwrap();
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
            black_box(counter.get("flower"))
        })
    });

    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");

    for stored in [10usize, 100, 1_000] {
        let counter = WordCounter::new(Arc::new(create_test_dictionary(stored)));
        for i in 0..stored {
            counter.add(alpha_word("syna", i).as_str()).unwrap();
        }

        group.throughput(Throughput::Elements(stored as u64));
        group.bench_with_input(BenchmarkId::new("synonym_count", stored), &stored, |b, _| {
            let query = alpha_word("word", 0);
            b.iter(|| black_box(counter.count(black_box(query.as_str()))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_count);
criterion_main!(benches);
