//! Performance benchmarks for the payroll engine.
//!
//! - Single day classification
//! - Half-month and full-month summaries
//! - One request through the HTTP router
//! - Batch of 100 employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{DayType, classify_day, compute_pay_summary, resolve_rates};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{AttendanceRecord, Employee, PayPeriod};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/ph").expect("Failed to load config");
    AppState::new(config)
}

fn create_employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: "Bench Employee".to_string(),
        monthly_salary: Decimal::new(15_700, 0),
        rest_day: Weekday::Sun,
    }
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Records for every non-Sunday of the period, with a long shift every third day.
fn create_records(employee_id: &str, period: &PayPeriod) -> Vec<AttendanceRecord> {
    period
        .days()
        .filter(|date| date.weekday() != Weekday::Sun)
        .enumerate()
        .map(|(i, date)| AttendanceRecord {
            employee_id: employee_id.to_string(),
            date,
            clock_in: Some(if i % 4 == 1 { time(9, 20) } else { time(9, 0) }),
            clock_out: Some(if i % 3 == 0 { time(23, 30) } else { time(18, 0) }),
            day_type_tag: None,
        })
        .collect()
}

fn period(start: (i32, u32, u32), end: (i32, u32, u32)) -> PayPeriod {
    PayPeriod::new(
        NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
        NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
    )
    .unwrap()
}

/// Benchmark: Single day classification.
fn bench_single_day(c: &mut Criterion) {
    let rates = resolve_rates(Decimal::new(15_700, 0));
    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let record = AttendanceRecord {
        employee_id: "emp_bench_001".to_string(),
        date,
        clock_in: Some(time(9, 0)),
        clock_out: Some(time(23, 30)),
        day_type_tag: None,
    };

    c.bench_function("single_day", |b| {
        b.iter(|| {
            black_box(classify_day(
                black_box(date),
                DayType::Ordinary,
                Some(black_box(&record)),
                &rates,
            ))
        })
    });
}

/// Benchmark: Summaries over increasing period lengths.
fn bench_period_lengths(c: &mut Criterion) {
    let state = create_test_state();
    let calendar = state.config().calendar();
    let employee = create_employee("emp_bench_001");

    let mut group = c.benchmark_group("period");

    for (name, period) in [
        ("week", period((2026, 1, 5), (2026, 1, 11))),
        ("half_month", period((2026, 1, 1), (2026, 1, 15))),
        ("month", period((2026, 12, 1), (2026, 12, 31))),
    ] {
        let records = create_records(&employee.id, &period);
        group.throughput(Throughput::Elements(period.day_count() as u64));
        group.bench_with_input(BenchmarkId::new("summary", name), &records, |b, records| {
            b.iter(|| {
                black_box(compute_pay_summary(&employee, &period, records, calendar).unwrap())
            })
        });
    }

    group.finish();
}

fn request_body(employee_id: &str) -> String {
    let attendance: Vec<serde_json::Value> = (1..=15)
        .filter_map(|day| NaiveDate::from_ymd_opt(2026, 1, day))
        .filter(|date| date.weekday() != Weekday::Sun)
        .map(|date| {
            serde_json::json!({
                "date": date.to_string(),
                "clock_in": "09:00",
                "clock_out": "18:00"
            })
        })
        .collect();

    serde_json::json!({
        "employee": {
            "id": employee_id,
            "name": "Bench Employee",
            "monthly_salary": "15700",
            "rest_day": "Sunday"
        },
        "period": { "start_date": "2026-01-01", "end_date": "2026-01-15" },
        "attendance": attendance
    })
    .to_string()
}

/// Benchmark: One half-month request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = request_body("emp_bench_001");

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
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

/// Benchmark: Batch of 100 employees over a half-month.
fn bench_batch_100(c: &mut Criterion) {
    let state = create_test_state();
    let calendar = state.config().calendar();
    let period = period((2026, 1, 1), (2026, 1, 15));

    let employees: Vec<(Employee, Vec<AttendanceRecord>)> = (0..100)
        .map(|i| {
            let employee = create_employee(&format!("emp_batch_{:03}", i));
            let records = create_records(&employee.id, &period);
            (employee, records)
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.iter(|| {
            let results: Vec<_> = employees
                .iter()
                .map(|(employee, records)| {
                    compute_pay_summary(employee, &period, records, calendar).unwrap()
                })
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_day,
    bench_period_lengths,
    bench_single_request,
    bench_batch_100,
);
criterion_main!(benches);
