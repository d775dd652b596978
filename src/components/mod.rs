//! Presentational components shared across pages.

pub mod header;
