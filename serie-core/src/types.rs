//! Re-export of foundational types from `serie-types`.
// Consolidated so downstream crates can depend on `serie-core` only

pub use serie_types::{
    CanonicalSeries, Label, NormalizeOptions, Observation, RawFrame, RowIndex, Scalar,
    SerieConfig, SerieError,
};
