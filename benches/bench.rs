// Criterion benchmarks for IAEF API

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use iaef_api::core::classify;
use iaef_api::models::Answer;
use iaef_api::routes::{route, RouteRequest};
use serde_json::json;

fn create_answers(count: usize) -> Vec<Answer> {
    const LABELS: [&str; 4] = ["visual", "auditory", "kinesthetic", "other"];
    (0..count)
        .map(|i| Answer::new(i as i64, LABELS[i % LABELS.len()]))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for size in [5, 50, 500].iter() {
        let answers = create_answers(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| classify(black_box(&answers)));
        });
    }

    group.finish();
}

fn bench_route(c: &mut Criterion) {
    let submit = RouteRequest::new("POST", "/api/v1/assessment/submit").with_body(json!({
        "answers": [
            {"question_id": 1, "answer": "visual"},
            {"question_id": 2, "answer": "auditory"},
            {"question_id": 3, "answer": "visual"},
            {"question_id": 4, "answer": "kinesthetic"},
            {"question_id": 5, "answer": "visual"}
        ]
    }));
    let not_found = RouteRequest::new("GET", "/nonexistent");

    c.bench_function("route_submit", |b| b.iter(|| route(black_box(&submit))));
    c.bench_function("route_not_found", |b| b.iter(|| route(black_box(&not_found))));
}

criterion_group!(benches, bench_classify, bench_route);
criterion_main!(benches);
