//! csv2ofx-ingest: bank-specific statement readers producing a [`Statement`].

pub mod parsers;

pub use csv2ofx_core::{Error, Result, Statement, Transaction};
pub use parsers::busey::{parse_busey_csv, parse_busey_reader};
