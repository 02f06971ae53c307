use criterion::{Criterion, black_box, criterion_group, criterion_main};
use xuanji_base::{
    GanZhi, Stem, cyclic_number, day_ganzhi, month_ganzhi, new_moon_jde,
    sun_apparent_longitude_deg, year_ganzhi,
};

fn ganzhi_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ganzhi");
    group.bench_function("year_ganzhi", |b| b.iter(|| year_ganzhi(black_box(2024))));
    group.bench_function("day_ganzhi", |b| {
        b.iter(|| day_ganzhi(black_box(2_460_351)))
    });
    group.bench_function("month_ganzhi", |b| {
        b.iter(|| month_ganzhi(black_box(Stem::Jia), black_box(7)))
    });
    group.bench_function("index", |b| {
        let gz = GanZhi::from_index(37);
        b.iter(|| black_box(gz).index())
    });
    group.bench_function("cyclic_number", |b| {
        b.iter(|| cyclic_number(black_box(4_052), 8))
    });
    group.finish();
}

fn astro_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("astro");
    group.bench_function("sun_apparent_longitude", |b| {
        b.iter(|| sun_apparent_longitude_deg(black_box(jd)))
    });
    group.bench_function("new_moon_jde", |b| b.iter(|| new_moon_jde(black_box(300))));
    group.finish();
}

criterion_group!(benches, ganzhi_bench, astro_bench);
criterion_main!(benches);
