use core_text::{Segmenter, StepState};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn corpus() -> Vec<(&'static str, String)> {
    vec![
        ("ascii", "The quick brown fox jumps over the lazy dog. ".repeat(200)),
        ("cjk", "日本語のテキストを分割します。漢字と仮名。".repeat(200)),
        (
            "emoji",
            "👨\u{200D}👩\u{200D}👧 🇩🇪 👍🏽 1\u{FE0F}\u{20E3} ❤\u{FE0F} ".repeat(200),
        ),
        ("devanagari", "नमस्ते दुनिया। क्षत्रिय ".repeat(200)),
        (
            "mixed",
            "Mr. Smith paid $3.50 for café au lait; 世界 says 😀. Really?! ".repeat(200),
        ),
    ]
}

fn bench_engines(c: &mut Criterion) {
    let segmenter = Segmenter::default();
    let mut group = c.benchmark_group("segmentation");
    for (name, text) in corpus() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("graphemes", name), &text, |b, text| {
            b.iter(|| segmenter.grapheme_count(black_box(text.as_str())))
        });
        group.bench_with_input(BenchmarkId::new("words", name), &text, |b, text| {
            b.iter(|| segmenter.word_count(black_box(text.as_str())))
        });
        group.bench_with_input(BenchmarkId::new("sentences", name), &text, |b, text| {
            b.iter(|| segmenter.sentence_count(black_box(text.as_str())))
        });
        group.bench_with_input(BenchmarkId::new("width", name), &text, |b, text| {
            b.iter(|| segmenter.width(black_box(text.as_str())))
        });
    }
    group.finish();
}

fn bench_combined_step(c: &mut Criterion) {
    let segmenter = Segmenter::default();
    let mut group = c.benchmark_group("step");
    for (name, text) in corpus() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| {
                let mut rest = black_box(text.as_bytes());
                let mut state = StepState::default();
                let mut words = 0usize;
                while !rest.is_empty() {
                    let out = segmenter.step(rest, state);
                    words += usize::from(out.boundaries.contains(core_text::Boundaries::WORD));
                    rest = out.remainder;
                    state = out.state;
                }
                words
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engines, bench_combined_step);
criterion_main!(benches);
