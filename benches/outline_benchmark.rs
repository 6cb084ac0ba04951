//! Benchmarks for narrative-outline parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic narratives shaped like the analysis
//! backend's output.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const TITLES: [&str; 4] = [
    "Key Health Challenges",
    "Healthcare Access Analysis",
    "Recommendations",
    "Priority Areas",
];

/// Creates a synthetic narrative with the given number of sections.
fn create_test_narrative(section_count: usize) -> String {
    let mut content = String::new();

    for i in 0..section_count {
        let title = TITLES[i % TITLES.len()];
        content.push_str(&format!("{}. {}:\n", i + 1, title));
        for j in 0..5 {
            content.push_str(&format!(
                "   - Finding {} for section {}: prevalence rose 3.{}% year over year\n",
                j,
                i + 1,
                j
            ));
        }
        content.push_str("   Summary sentence with **emphasis** for cleanup.\n\n");
    }

    content
}

/// Benchmark the full parse at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrative_parsing");

    for section_count in [4, 40, 400].iter() {
        let raw = create_test_narrative(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| narrative_outline::parse(black_box(&raw)));
        });
    }

    group.finish();
}

/// Benchmark the cleanup pre-pass.
fn bench_cleanup(c: &mut Criterion) {
    let raw = create_test_narrative(40);
    let pipeline =
        narrative_outline::parser::CleanupPipeline::from_preset(narrative_outline::CleanupPreset::Standard);

    c.bench_function("cleanup_standard_40_sections", |b| {
        b.iter(|| pipeline.process(black_box(&raw)));
    });
}

/// Benchmark line classification alone.
fn bench_classify(c: &mut Criterion) {
    let lines = [
        "2. Expand screening programs",
        "- Improve access in rural counties",
        "Overall the region performs above average.",
    ];

    c.bench_function("classify_lines", |b| {
        b.iter(|| {
            for line in lines.iter() {
                black_box(narrative_outline::classify(black_box(line)));
            }
        });
    });
}

/// Benchmark batch parsing, sequential against parallel.
fn bench_batch(c: &mut Criterion) {
    let narratives: Vec<String> = (0..32).map(|_| create_test_narrative(8)).collect();
    let mut group = c.benchmark_group("batch_parsing");

    group.bench_function("parallel", |b| {
        b.iter(|| narrative_outline::parse_batch(black_box(&narratives)));
    });

    group.bench_function("sequential", |b| {
        let parser = narrative_outline::NarrativeParser::with_options(
            narrative_outline::ParseOptions::new().sequential(),
        );
        b.iter(|| parser.parse_batch(black_box(&narratives)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_cleanup,
    bench_classify,
    bench_batch,
);
criterion_main!(benches);
