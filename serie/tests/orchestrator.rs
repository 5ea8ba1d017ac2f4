mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::{MockSource, TCS, d, flat_frame, req};
use serie::{
    Horizon, MatchStrategy, NormalizeOptions, RawFrame, Serie, SerieConfig, SerieError,
};
use serie_mock::NaiveForecaster;

fn tcs_frame() -> RawFrame {
    flat_frame(
        TCS,
        &[
            ("2024-01-04", 3741.3, 3730.4),
            ("2024-01-05", 3744.6, 3741.3),
            ("2024-01-06", 3750.0, 3744.6),
            ("2024-01-08", 3708.0, 3744.6),
        ],
    )
}

#[test]
fn build_requires_a_source() {
    let err = Serie::builder().build().err().unwrap();
    assert!(matches!(err, SerieError::InvalidArg(_)));
}

#[test]
fn build_rejects_zero_timeout() {
    let src = MockSource::builder().build();
    let err = Serie::builder()
        .with_source(src)
        .provider_timeout(Duration::ZERO)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, SerieError::InvalidArg(_)));
}

#[tokio::test]
async fn empty_frame_is_skipped() {
    let empty = MockSource::builder().name("empty").build();
    let filled = MockSource::builder()
        .name("filled")
        .returns_ok(tcs_frame())
        .build();

    let serie = Serie::builder()
        .with_source(empty.clone())
        .with_source(filled.clone())
        .build()
        .unwrap();

    let out = serie.fetch(&req(TCS)).await.unwrap();
    assert_eq!(out.source, "filled");
    assert_eq!(out.frame.height(), 4);
    assert_eq!(empty.calls(), 1);
}

#[tokio::test]
async fn first_non_empty_source_wins() {
    let first = MockSource::builder()
        .name("first")
        .returns_ok(tcs_frame())
        .build();
    let second = MockSource::builder()
        .name("second")
        .returns_ok(tcs_frame())
        .build();

    let serie = Serie::builder()
        .with_source(first)
        .with_source(second.clone())
        .build()
        .unwrap();

    assert_eq!(serie.fetch(&req(TCS)).await.unwrap().source, "first");
    assert_eq!(second.calls(), 0);
}

#[tokio::test]
async fn error_falls_back_to_next_source() {
    let bad = MockSource::builder()
        .name("bad")
        .returns_err(SerieError::Data("garbled".into()))
        .build();
    let good = MockSource::builder()
        .name("good")
        .returns_ok(tcs_frame())
        .build();

    let serie = Serie::builder()
        .with_source(bad)
        .with_source(good)
        .build()
        .unwrap();
    assert_eq!(serie.fetch(&req(TCS)).await.unwrap().source, "good");
}

#[tokio::test]
async fn all_empty_is_empty_input() {
    let serie = Serie::builder()
        .with_source(MockSource::builder().name("a").build())
        .with_source(MockSource::builder().name("b").build())
        .build()
        .unwrap();
    assert_eq!(
        serie.fetch(&req(TCS)).await.unwrap_err(),
        SerieError::EmptyInput
    );
    assert_eq!(
        serie.prepare(&req(TCS), "Close").await.unwrap_err(),
        SerieError::EmptyInput
    );
}

#[tokio::test]
async fn all_failures_are_aggregated_and_tagged() {
    let a = MockSource::builder()
        .name("a")
        .returns_err(SerieError::source("a", "503"))
        .build();
    let b = MockSource::builder()
        .name("b")
        .returns_err(SerieError::Data("bad payload".into()))
        .build();
    let empty = MockSource::builder().name("c").build();

    let serie = Serie::builder()
        .with_source(a)
        .with_source(b)
        .with_source(empty)
        .build()
        .unwrap();

    let err = serie.fetch(&req(TCS)).await.unwrap_err();
    let SerieError::AllSourcesFailed(inner) = &err else {
        panic!("expected AllSourcesFailed, got {err:?}");
    };
    assert_eq!(inner.len(), 2);
    assert_eq!(inner[0], SerieError::source("a", "503"));
    assert_eq!(
        inner[1],
        SerieError::source("b", "data issue: bad payload")
    );
    assert!(err.is_actionable());
}

#[tokio::test(start_paused = true)]
async fn slow_source_times_out_then_falls_back() {
    let slow = MockSource::builder()
        .name("slow")
        .returns_ok(tcs_frame())
        .delay(Duration::from_secs(60))
        .build();
    let fast = MockSource::builder()
        .name("fast")
        .returns_ok(tcs_frame())
        .build();

    let serie = Serie::builder()
        .with_source(slow)
        .with_source(fast)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    assert_eq!(serie.fetch(&req(TCS)).await.unwrap().source, "fast");
}

#[tokio::test(start_paused = true)]
async fn only_slow_source_reports_timeout() {
    let slow = MockSource::builder()
        .name("slow")
        .returns_ok(tcs_frame())
        .delay(Duration::from_secs(60))
        .build();
    let serie = Serie::builder()
        .with_source(slow)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    assert_eq!(
        serie.fetch(&req(TCS)).await.unwrap_err(),
        SerieError::AllSourcesFailed(vec![SerieError::source_timeout("slow")])
    );
}

#[tokio::test]
async fn prepare_normalizes_and_keeps_the_raw_frame() {
    let src = MockSource::builder()
        .name("flat")
        .returns_ok(tcs_frame())
        .build();
    let serie = Serie::builder().with_source(src).build().unwrap();

    let prepared = serie.prepare(&req(TCS), "Close").await.unwrap();
    assert_eq!(prepared.source, "flat");
    assert_eq!(
        prepared.series().dates(),
        vec![d(2024, 1, 4), d(2024, 1, 5), d(2024, 1, 8)]
    );
    assert_eq!(
        prepared.normalized.price_column.strategy,
        MatchStrategy::Exact("Close".into())
    );

    let open = serie.normalize(&prepared.frame, "Open").unwrap();
    assert_eq!(open.series.values(), vec![3730.4, 3741.3, 3744.6]);
}

#[tokio::test]
async fn prepare_surfaces_column_resolution() {
    let frame = RawFrame::new(
        vec!["Date".into(), "Volume".into()],
        vec![vec!["2024-01-05".into(), 10i64.into()]],
    )
    .unwrap();
    let src = MockSource::builder().returns_ok(frame).build();
    let serie = Serie::builder().with_source(src).build().unwrap();

    let err = serie.prepare(&req(TCS), "Close").await.unwrap_err();
    assert_eq!(
        err.available_columns(),
        Some(&["Date".to_string(), "Volume".to_string()][..])
    );
}

#[tokio::test]
async fn configured_options_drive_normalization() {
    let src = MockSource::builder().returns_ok(tcs_frame()).build();
    let serie = Serie::builder()
        .with_source(src)
        .options(NormalizeOptions {
            business_days_only: false,
            ..NormalizeOptions::default()
        })
        .build()
        .unwrap();
    let prepared = serie.prepare(&req(TCS), "Close").await.unwrap();
    assert_eq!(prepared.series().len(), 4);
}

#[test]
fn config_from_json() {
    let cfg: SerieConfig = serde_json::from_str(
        r#"{"provider_timeout":{"secs":2,"nanos":0},"normalize":{"date_label":"timestamp"}}"#,
    )
    .unwrap();
    let serie = Serie::builder()
        .with_source(MockSource::builder().build())
        .config(cfg)
        .build()
        .unwrap();
    assert_eq!(serie.config().provider_timeout, Duration::from_secs(2));
    assert_eq!(serie.config().normalize.date_label, "timestamp");
    assert!(serie.config().normalize.business_days_only);
}

#[tokio::test]
async fn forecast_end_to_end() {
    let src = MockSource::builder().returns_ok(tcs_frame()).build();
    let serie = Serie::builder().with_source(src).build().unwrap();
    let prepared = serie.prepare(&req(TCS), "Close").await.unwrap();

    let mut model = NaiveForecaster::new();
    let horizon = Horizon::business_days(5).unwrap();
    let fc = serie.forecast(&mut model, prepared.series(), &horizon).unwrap();

    assert_eq!(fc.points.len(), 3 + 5);
    assert_eq!(fc.tail(5)[0].ds, d(2024, 1, 9));
    assert!(fc.tail(5).iter().all(|p| p.yhat == 3708.0));
}

#[test]
fn forecast_rejects_empty_series() {
    let serie = Serie::builder()
        .with_source(MockSource::builder().build())
        .build()
        .unwrap();
    let mut model = NaiveForecaster::new();
    let err = serie
        .forecast(&mut model, &Default::default(), &Horizon::default())
        .unwrap_err();
    assert_eq!(err, SerieError::EmptySeries { input_rows: 0 });
    assert!(!model.is_fitted());
}

#[tokio::test]
async fn mock_crate_sources_plug_in() {
    let serie = Serie::builder()
        .with_source(Arc::new(serie_mock::MockSource::new()))
        .build()
        .unwrap();

    let prepared = serie.prepare(&req("TCS.NS"), "Close").await.unwrap();
    assert_eq!(prepared.source, "serie-mock");
    assert!(prepared.normalized.report.weekend_rows >= 1);

    let err = serie.prepare(&req("FAIL"), "Close").await.unwrap_err();
    assert!(matches!(err, SerieError::AllSourcesFailed(_)));
}
