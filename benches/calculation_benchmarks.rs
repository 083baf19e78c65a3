//! Performance benchmarks for the Leave Engine.
//!
//! Covers the pure calculator across day types and leave lengths, plus the
//! `/leave/compute` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_engine::api::{AppState, create_router};
use leave_engine::calculation::{calculate_leave, compute_leave};
use leave_engine::config::ConfigLoader;
use leave_engine::models::{DayType, LeaveComputationInput};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

fn start_date() -> NaiveDate {
    // Monday
    NaiveDate::from_ymd_opt(2024, 12, 16).unwrap()
}

/// Benchmark: a typical two-week request for each day type.
fn bench_single_request(c: &mut Criterion) {
    let holidays = load_config().holiday_set(None);
    let mut group = c.benchmark_group("single_request");

    for day_type in DayType::ALL {
        let input = LeaveComputationInput::new(start_date(), 10, day_type);
        group.bench_with_input(
            BenchmarkId::new("compute_leave", day_type),
            &input,
            |b, input| b.iter(|| black_box(compute_leave(black_box(input), &holidays))),
        );
    }

    group.finish();
}

/// Benchmark: scaling with the number of units requested.
fn bench_scaling(c: &mut Criterion) {
    let holidays = load_config().holiday_set(None);
    let mut group = c.benchmark_group("scaling");

    for units in [1_i64, 10, 60, 365, 3660] {
        let input = LeaveComputationInput::new(start_date(), units, DayType::FullDay);
        group.throughput(Throughput::Elements(units as u64));
        group.bench_with_input(BenchmarkId::new("units", units), &input, |b, input| {
            b.iter(|| black_box(calculate_leave(black_box(input), &holidays)))
        });
    }

    group.finish();
}

/// Benchmark: `/leave/compute` through the router.
fn bench_compute_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = serde_json::json!({
        "start_date": "2024-12-16",
        "units": 10,
        "day_type": "full_day"
    })
    .to_string();

    c.bench_function("compute_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/leave/compute")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_request,
    bench_scaling,
    bench_compute_endpoint,
);
criterion_main!(benches);
