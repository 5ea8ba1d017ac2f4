use chrono::NaiveDate;
use serie_core::{
    CanonicalSeries, Horizon, Observation, SerieError, future_business_days, future_frame,
    is_business_day, next_business_day,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn weekdays_are_business_days() {
    // 2024-01-08 is a Monday.
    for day in 8..=12 {
        assert!(is_business_day(d(2024, 1, day)));
    }
    assert!(!is_business_day(d(2024, 1, 13)));
    assert!(!is_business_day(d(2024, 1, 14)));
}

#[test]
fn next_business_day_skips_weekend() {
    assert_eq!(next_business_day(d(2024, 1, 5)), Some(d(2024, 1, 8)));
    assert_eq!(next_business_day(d(2024, 1, 6)), Some(d(2024, 1, 8)));
    assert_eq!(next_business_day(d(2024, 1, 8)), Some(d(2024, 1, 9)));
    assert_eq!(next_business_day(NaiveDate::MAX), None);
}

#[test]
fn future_days_cross_weekends() {
    assert_eq!(
        future_business_days(d(2024, 1, 4), 4),
        vec![d(2024, 1, 5), d(2024, 1, 8), d(2024, 1, 9), d(2024, 1, 10)]
    );
    assert!(future_business_days(d(2024, 1, 4), 0).is_empty());
}

#[test]
fn horizon_bounds() {
    assert!(matches!(
        Horizon::business_days(0),
        Err(SerieError::InvalidArg(_))
    ));
    assert!(matches!(
        Horizon::business_days(366),
        Err(SerieError::InvalidArg(_))
    ));
    assert_eq!(Horizon::business_days(1).unwrap().periods(), 1);
    assert_eq!(Horizon::business_days(365).unwrap().periods(), 365);
    assert_eq!(Horizon::default().periods(), 30);
}

#[test]
fn future_frame_sorts_dedups_and_extends() {
    let history = CanonicalSeries::from_rows(vec![
        Observation::new(d(2024, 1, 9), 2.0),
        Observation::new(d(2024, 1, 8), 1.0),
        Observation::new(d(2024, 1, 9), 3.0),
        Observation::new(d(2024, 1, 12), 4.0),
    ]);
    let dates = future_frame(&history, &Horizon::business_days(2).unwrap()).unwrap();
    assert_eq!(
        dates,
        vec![
            d(2024, 1, 8),
            d(2024, 1, 9),
            d(2024, 1, 12),
            d(2024, 1, 15),
            d(2024, 1, 16)
        ]
    );
}

#[test]
fn future_frame_needs_history() {
    let err = future_frame(&CanonicalSeries::default(), &Horizon::default()).unwrap_err();
    assert_eq!(err, SerieError::EmptySeries { input_rows: 0 });
}
