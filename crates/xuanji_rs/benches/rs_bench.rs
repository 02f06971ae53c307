use criterion::{Criterion, black_box, criterion_group, criterion_main};
use xuanji_rs::{parse_birth, bazi_for, lunar_new_year};

fn facade_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");
    group.bench_function("parse_birth", |b| {
        b.iter(|| parse_birth(black_box("1990-05-17 14:30")))
    });
    group.bench_function("bazi_for", |b| {
        let birth = parse_birth("1990-05-17 14:30").ok();
        b.iter(|| birth.map(|p| bazi_for(black_box(p))))
    });
    group.sample_size(20);
    group.bench_function("lunar_new_year", |b| {
        b.iter(|| lunar_new_year(black_box(2033)))
    });
    group.finish();
}

criterion_group!(benches, facade_bench);
criterion_main!(benches);
