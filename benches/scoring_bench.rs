use apex::audit::Auditor;
use apex::calibrations::KnownCalibration;
use apex::inputs::RawAthleteInputs;
use apex::results::ResultRow;
use apex::scorer::Scorer;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn sample_inputs() -> RawAthleteInputs {
    RawAthleteInputs {
        sprint_time: "4.80".to_string(),
        toss_distance: "65'0\"".to_string(),
        vertical_height: "32".to_string(),
        broad_distance: "9'6\"".to_string(),
        push_reps: "30".to_string(),
        pull_reps: "25".to_string(),
        mile_time: "6:15".to_string(),
    }
}

fn sample_rows(n: usize) -> Vec<ResultRow> {
    (0..n)
        .map(|i| ResultRow {
            id: i as i64,
            event_name: "Bench Open".to_string(),
            date: "2025-06-01".to_string(),
            athlete_rank: i as u32 + 1,
            athlete_name: format!("Athlete {}", i),
            apex_score: 657.0,
            gender: if i % 2 == 0 { "Men" } else { "Women" }.to_string(),
            speed_score: Some(168.0),
            power_score: Some(162.0),
            strength_score: Some(171.0),
            endurance_score: Some(156.0),
            fast_forty: format!("4.{:02}", 50 + i % 50),
            max_toss: "65'0\"".to_string(),
            the_vertical: "32".to_string(),
            the_broad: "9'6\"".to_string(),
            the_push: Some((i % 50) as u32),
            the_pull: Some((i % 30) as u32),
            the_mile: format!("6:{:02}", i % 60),
            instagram_handle: None,
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = Scorer::known(KnownCalibration::Apex2025).expect("built-in calibration");
    let inputs = sample_inputs();

    c.bench_function("evaluate (7 fields)", |b| {
        b.iter(|| scorer.evaluate(black_box(&inputs)))
    });

    let auditor = Auditor::new(Arc::new(scorer));
    let rows = sample_rows(1000);
    c.bench_function("audit (1k rows)", |b| {
        b.iter(|| auditor.audit(black_box(&rows)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
