use criterion::{black_box, criterion_group, criterion_main, Criterion};
use result_search_engine::{
    core::SubjectScore,
    scoring::{PercentageSummary, ScoringConfig},
};
use std::collections::BTreeMap;

fn create_test_subjects() -> BTreeMap<String, SubjectScore> {
    let entries = [
        ("041", "MATHEMATICS", "92"),
        ("086", "SCIENCE", "88"),
        ("087", "SOCIAL SCIENCE", "90"),
        ("184", "HINDI COURSE-B", "85"),
        ("301", "ENGLISH LANG & LIT.", "95"),
        ("048", "PHYSICAL EDUCATION", "96"),
        ("954", "INFORMATION TECHNOLOGY", "---"),
    ];
    entries
        .iter()
        .map(|(code, name, marks)| (code.to_string(), SubjectScore::new(*name, *marks)))
        .collect()
}

fn bench_percentage_computation(c: &mut Criterion) {
    let config = ScoringConfig::default();
    let subjects = create_test_subjects();

    c.bench_function("compute_percentages", |b| {
        b.iter(|| black_box(PercentageSummary::compute(&subjects, &config)));
    });

    c.bench_function("compute_with_precomputed", |b| {
        b.iter(|| {
            black_box(
                PercentageSummary::compute(&subjects, &config)
                    .with_precomputed(Some(91.5), None),
            )
        });
    });
}

criterion_group!(benches, bench_percentage_computation);
criterion_main!(benches);
