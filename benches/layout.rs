//! Benchmarks for the two layout passes and full SVG/text conversion.

use brailleprint::{convert, svg::SvgFormat, text::TextFormat, CharTable, LayoutEngine};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog. \
PACK MY BOX WITH FIVE DOZEN LIQUOR JUGS!\n\
Sphinx of black quartz, judge my vow; 1234567890 times.";

fn long_text() -> String {
    std::iter::repeat(PARAGRAPH).take(50).collect::<Vec<_>>().join("\n")
}

fn bench_layout(c: &mut Criterion) {
    let table = CharTable::english();
    let engine = LayoutEngine::new(table);
    let text = long_text();

    c.bench_function("measure", |b| {
        b.iter(|| engine.measure(black_box(&text)).unwrap())
    });
    c.bench_function("place", |b| b.iter(|| engine.place(black_box(&text)).unwrap()));
}

fn bench_convert(c: &mut Criterion) {
    let table = CharTable::english();
    let text = long_text();
    let svg = SvgFormat::new();
    let unicode = TextFormat::new();

    c.bench_function("convert_svg", |b| {
        b.iter(|| convert(black_box(&text), table, &svg).unwrap())
    });
    c.bench_function("convert_text", |b| {
        b.iter(|| convert(black_box(&text), table, &unicode).unwrap())
    });
}

criterion_group!(benches, bench_layout, bench_convert);
criterion_main!(benches);
