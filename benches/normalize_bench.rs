use criterion::{Criterion, criterion_group, criterion_main};
use ensnorm::EnsNameNormalizer;
use std::hint::black_box;

fn bench_normalize(c: &mut Criterion) {
    let normalizer = EnsNameNormalizer::new();

    let mut group = c.benchmark_group("normalize");
    for (name, input) in [
        ("ascii_fast_path", "vitalik.eth"),
        ("ascii_mapped", "Vitalik.ETH"),
        ("latin_nfc", "cafe\u{301}-on-main.eth"),
        ("cyrillic", "привет123.eth"),
        ("emoji", "👍🏻👨\u{200D}💻.eth"),
        ("hangul_jamo", "\u{1112}\u{1161}\u{11AB}\u{AE00}.eth"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| normalizer.normalize(black_box(input)).unwrap())
        });
    }
    group.finish();

    let mut group = c.benchmark_group("tokenize");
    group.bench_function("mixed", |b| {
        b.iter(|| normalizer.tokenize(black_box("RaFFY🚴\u{200D}♂\u{FE0F}.eTh")))
    });
    group.finish();

    c.bench_function("construct_tables", |b| {
        b.iter(EnsNameNormalizer::new)
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
