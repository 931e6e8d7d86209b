//! csv2ofx-core: transaction model, statement metadata, and the OFX renderer

pub mod error;
pub mod ofx;
pub mod statement;
pub mod transaction;

pub use error::{Error, Result};
pub use ofx::{OfxDefaults, render_statement, write_statement};
pub use statement::Statement;
pub use transaction::{Transaction, TransactionType, format_amount, format_date};
