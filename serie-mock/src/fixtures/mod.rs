pub mod history;
pub mod ticker_columns;
