mod helpers;

use helpers::{MockSource, TCS, flat_frame, req};
use proptest::prelude::*;
use serie::{Serie, SerieError};

const NAMES: [&str; 6] = ["s0", "s1", "s2", "s3", "s4", "s5"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Empty,
    Fail,
    Data,
}

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![Just(Outcome::Empty), Just(Outcome::Fail), Just(Outcome::Data)]
}

proptest! {
    #[test]
    fn first_data_wins_else_failures_beat_empties(outcomes in proptest::collection::vec(outcome(), 1..=6)) {
        let mut builder = Serie::builder();
        for (name, o) in NAMES.iter().zip(&outcomes) {
            let src = MockSource::builder().name(*name);
            let src = match o {
                Outcome::Empty => src,
                Outcome::Fail => src.returns_err(SerieError::source(*name, "down")),
                Outcome::Data => src.returns_ok(flat_frame(TCS, &[("2024-01-05", 1.0, 1.0)])),
            };
            builder = builder.with_source(src.build());
        }
        let serie = builder.build().unwrap();

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let got = rt.block_on(serie.fetch(&req(TCS)));

        match outcomes.iter().position(|o| *o == Outcome::Data) {
            Some(i) => prop_assert_eq!(got.unwrap().source, NAMES[i]),
            None => {
                let failed: Vec<SerieError> = NAMES
                    .iter()
                    .zip(&outcomes)
                    .filter(|(_, o)| **o == Outcome::Fail)
                    .map(|(n, _)| SerieError::source(*n, "down"))
                    .collect();
                let expected = if failed.is_empty() {
                    SerieError::EmptyInput
                } else {
                    SerieError::AllSourcesFailed(failed)
                };
                prop_assert_eq!(got.unwrap_err(), expected);
            }
        }
    }
}
