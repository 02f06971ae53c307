use criterion::{Criterion, black_box, criterion_group, criterion_main};
use xuanji_divine::{
    Category, DivinationEngine, DivinationRequest, VisualData, compute_bazi,
    hexagram_from_numbers, hexagram_from_time, parse_llm_reply, qimen_from_time,
};
use xuanji_search::PillarConfig;
use xuanji_time::{CivilDateTime, FixedClock, PartialDateTime};

fn calculators_bench(c: &mut Criterion) {
    let dt = CivilDateTime::new(1990, 5, 17, 14, 30, 0.0);
    let cfg = PillarConfig::default();

    let mut group = c.benchmark_group("calculators");
    group.bench_function("hexagram_numbers", |b| {
        b.iter(|| hexagram_from_numbers(black_box(37), black_box(92)))
    });
    group.bench_function("hexagram_time", |b| {
        b.iter(|| hexagram_from_time(black_box(&dt)))
    });
    group.bench_function("qimen", |b| b.iter(|| qimen_from_time(black_box(&dt))));
    group.bench_function("bazi", |b| {
        b.iter(|| compute_bazi(black_box(PartialDateTime::from(dt)), &cfg))
    });
    group.finish();
}

fn engine_bench(c: &mut Criterion) {
    let engine = DivinationEngine::new(
        FixedClock(CivilDateTime::new(2025, 1, 1, 0, 0, 0.0)),
        PillarConfig::default(),
    );
    let req = DivinationRequest {
        category: Category::General,
        question: "bench".into(),
        birth_data: serde_json::from_str(r#"{"year":1990,"month":5,"day":17,"hour":14}"#).ok(),
        divine_data: None,
    };
    let reply = format!("prefix {{\"overview\":\"{}\"}} suffix", "吉".repeat(500));

    let mut group = c.benchmark_group("engine");
    group.bench_function("visual_data", |b| b.iter(|| engine.visual_data(black_box(&req))));
    group.bench_function("parse_llm_reply", |b| {
        b.iter(|| parse_llm_reply(black_box(&reply), &VisualData::default()))
    });
    group.finish();
}

criterion_group!(benches, calculators_bench, engine_bench);
criterion_main!(benches);
