use polars::prelude::*;

use crate::CanonicalSeries;

/// Conversion of serie data structures into Polars `DataFrame`s.
pub trait ToDataFrame {
    /// Convert into a `DataFrame`.
    ///
    /// # Errors
    /// Propagates Polars construction errors.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for CanonicalSeries {
    /// Two columns: `ds` (Date) and `y` (Float64), in series order.
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let ds = Column::new("ds".into(), self.dates());
        let y = Column::new("y".into(), self.values());
        DataFrame::new(vec![ds, y])
    }
}
