//! Criterion benchmarks for Spellbridge.
//!
//! Covers the normalization passes, full word extraction on documents of
//! growing size and on short inputs, and extractor construction.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spellbridge::analysis::word_extractor::WordExtractor;
use spellbridge::config::ExtractorConfig;

/// Generate test documents with punctuation, repeated separators and
/// contractions mixed in.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "spelling",
        "grammar",
        "don't",
        "well-known",
        "example.com",
        "text...",
        "(quoted)",
        "data",
        "it's",
        "--",
        "réunion",
        "naïve",
        "check,",
        "misspeled",
        "\u{201C}smart\u{201D}",
        "end.",
    ];

    (0..count)
        .map(|i| {
            let length = 50 + (i % 100);
            (0..length)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let extractor = WordExtractor::new(ExtractorConfig::default()).unwrap();
    let texts = generate_test_documents(100);

    group.bench_function("normalize_single_document", |b| {
        b.iter(|| black_box(extractor.normalize(black_box(&texts[0]))))
    });

    group.finish();
}

fn bench_extract_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_words");

    let extractor = WordExtractor::new(ExtractorConfig::default()).unwrap();
    let texts = generate_test_documents(100);

    for size in [1usize, 10, 100] {
        let document = texts[..size].join("\n");
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, text| {
            b.iter(|| black_box(extractor.extract_words(black_box(text))))
        });
    }

    group.finish();
}

fn bench_extract_short_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_short");

    let extractor = WordExtractor::new(ExtractorConfig::default()).unwrap();
    let inputs = [
        ("two_words", "word next"),
        ("sentence", "Don't stop... well-known words."),
        ("misspelled_field", "\u{FEFF}recieve the pakage"),
    ];

    for (name, text) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| black_box(extractor.extract_words(black_box(text))))
        });
    }

    group.finish();
}

fn bench_extractor_construction(c: &mut Criterion) {
    let config = ExtractorConfig::new().with_custom_punctuation("/\u{B7}");

    c.bench_function("extractor_construction", |b| {
        b.iter(|| black_box(WordExtractor::new(black_box(config.clone()))))
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_extract_words,
    bench_extract_short_inputs,
    bench_extractor_construction
);
criterion_main!(benches);
