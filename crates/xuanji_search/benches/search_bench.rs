use criterion::{Criterion, black_box, criterion_group, criterion_main};
use xuanji_search::{
    PillarConfig, SolarTerm, four_pillars, lunar_new_year, solar_term_jd, solar_terms_for_year,
};
use xuanji_time::CivilDateTime;

fn solar_term_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar_term");
    group.bench_function("lichun", |b| {
        b.iter(|| solar_term_jd(black_box(2024), SolarTerm::LiChun))
    });
    group.bench_function("full_year", |b| {
        b.iter(|| solar_terms_for_year(black_box(2024)))
    });
    group.finish();
}

fn calendar_bench(c: &mut Criterion) {
    let dt = CivilDateTime::new(1990, 5, 17, 14, 30, 0.0);
    let cfg = PillarConfig::default();

    let mut group = c.benchmark_group("calendar");
    group.bench_function("lunar_new_year", |b| {
        b.iter(|| lunar_new_year(black_box(2024), 480))
    });
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(&dt), &cfg))
    });
    group.finish();
}

criterion_group!(benches, solar_term_bench, calendar_bench);
criterion_main!(benches);
