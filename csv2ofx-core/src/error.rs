use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("could not split statement row")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
    #[error("no transactions found in statement")]
    NoTransactions,
    #[error("statement has no `Account Number:` line")]
    MissingAccountNumber,
    #[error("statement has no `Transaction Number,...` column header row")]
    MissingColumnHeader,
    #[error("line {line}: expected at least 7 fields, found {found}")]
    MissingField { line: usize, found: usize },
    #[error("line {line}: `{value}` is not a valid amount")]
    InvalidAmount { line: usize, value: String },
    #[error("`{date}` is not a MM/DD/YYYY date")]
    InvalidDate { date: String },
}

pub type Result<T> = std::result::Result<T, Error>;
