//! Benchmarks for grievance categorization
//!
//! Run with: cargo bench -p engine

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use engine::{Categorizer, TriageSummary, normalize};
use std::hint::black_box;

const SAMPLE: &str = "Broken street light on MG Road causing safety issues. \
  The pothole near the bus stop has caused two accidents this week and nobody \
  from the office has responded, which is pathetic.";

fn bench_normalize(c: &mut Criterion) {
  let mut group = c.benchmark_group("normalize");

  for repeat in [1, 10, 100].iter() {
    let text = SAMPLE.repeat(*repeat);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
      b.iter(|| normalize(black_box(text)));
    });
  }

  group.finish();
}

fn bench_categorize(c: &mut Criterion) {
  let categorizer = Categorizer::builtin();
  let mut group = c.benchmark_group("categorize");

  for repeat in [1, 10, 100].iter() {
    let text = SAMPLE.repeat(*repeat);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
      b.iter(|| categorizer.categorize(black_box(text)));
    });
  }

  group.finish();
}

fn bench_summary(c: &mut Criterion) {
  let categorizer = Categorizer::builtin();
  let results: Vec<_> = (0..1000)
    .map(|i| categorizer.categorize(&format!("{} #{}", SAMPLE, i)))
    .collect();

  c.bench_function("summary_1000", |b| {
    b.iter(|| TriageSummary::from_results(black_box(&results)));
  });
}

criterion_group!(benches, bench_normalize, bench_categorize, bench_summary);
criterion_main!(benches);
