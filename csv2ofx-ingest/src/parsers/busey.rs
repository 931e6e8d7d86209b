//! Busey Bank CSV export reader
//!
//! Expected layout (the export starts with a blank line):
//!
//!   Account Name: NAME NAME NAME
//!   Account Number: NUMBER
//!   Date Range: MM/DD/YYYY - MM/DD/YY
//!
//!   Transaction Number,Date,Description,Memo,Amount Debit,Amount Credit,Balance,Check Number,Fees
//!   1,01/02/2009,"Deposit","",,"50.00",150.00,,
//!
//! Header lines are recognised by prefix and the column header row ends the
//! header block. Every non-blank line after it is a transaction.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::WINDOWS_1252;
use regex::Regex;
use tracing::{debug, info, warn};

use csv2ofx_core::{Error, Result, Statement, Transaction, TransactionType};

/// Rows need at least this many fields (through `Balance`).
const MIN_FIELDS: usize = 7;

/// Parse a Busey CSV export from disk.
pub fn parse_busey_csv(path: impl AsRef<Path>) -> Result<Statement> {
    let file = File::open(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "opened busey export");
    parse_busey_reader(BufReader::new(file))
}

/// Parse a Busey CSV export from any buffered reader.
pub fn parse_busey_reader(mut reader: impl BufRead) -> Result<Statement> {
    let header_re = Regex::new(r"^(?P<key>Account Name|Account Number|Date Range)\s*:(?P<value>.*)$")?;
    let column_header_re = Regex::new(r"^Transaction Number\s*,\s*Date\s*,")?;

    let mut account_id = None;
    let mut in_section = false;
    let mut transactions = Vec::new();

    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let decoded = decode_line(&buf);
        let line = decoded.trim();
        if line.is_empty() {
            continue;
        }

        if !in_section {
            if column_header_re.is_match(line) {
                in_section = true;
            } else if let Some(caps) = header_re.captures(line) {
                if &caps["key"] == "Account Number" {
                    account_id = Some(account_number(&caps["value"]));
                }
            } else {
                warn!(line = line_no, text = line, "skipping unrecognised header line");
            }
            continue;
        }

        let txn = parse_row(line, line_no)?;
        debug!(line = line_no, id = %txn.id, amount = txn.amount, "parsed transaction");
        transactions.push(txn);
    }

    if !in_section {
        return Err(Error::MissingColumnHeader);
    }
    let account_id = account_id.ok_or(Error::MissingAccountNumber)?;
    let statement = Statement::new(account_id, transactions)?;

    info!(
        account = statement.account_id(),
        transactions = statement.len(),
        start = statement.start_date(),
        end = statement.end_date(),
        "parsed busey statement"
    );
    Ok(statement)
}

/// Exports are ASCII or Latin-1; anything that is not valid UTF-8 is read as windows-1252.
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

/// `Account Number: 123` -> `123`. Only the text up to a second colon counts.
fn account_number(value: &str) -> String {
    value.split(':').next().unwrap_or_default().trim().to_string()
}

fn parse_row(line: &str, line_no: usize) -> Result<Transaction> {
    let fields = split_fields(line)?;
    if fields.len() < MIN_FIELDS {
        return Err(Error::MissingField {
            line: line_no,
            found: fields.len(),
        });
    }

    let debit = parse_amount(&fields[4], line_no)?;
    let credit = parse_amount(&fields[5], line_no)?;

    Ok(Transaction {
        id: fields[0].to_string(),
        date: fields[1].to_string(),
        description: strip_quotes(&fields[2]).to_string(),
        memo: strip_quotes(&fields[3]).to_string(),
        amount: credit - debit,
        balance: fields[6].to_string(),
        kind: TransactionType::Other,
    })
}

/// Split a row on every comma. Quoting is off, so a comma inside a quoted
/// description splits the row; switching `quoting(true)` here is the place to
/// make this quote-aware.
fn split_fields(line: &str) -> Result<StringRecord> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    rdr.read_record(&mut record)?;
    Ok(record)
}

/// Drop the first and last character (the surrounding quotes).
fn strip_quotes(field: &str) -> &str {
    let mut chars = field.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Empty debit/credit cells count as zero. Some exports quote the amount.
fn parse_amount(field: &str, line_no: usize) -> Result<f64> {
    let value = field.trim().trim_matches('"').trim();
    if value.is_empty() {
        return Ok(0.0);
    }
    value.parse().map_err(|_| Error::InvalidAmount {
        line: line_no,
        value: field.to_string(),
    })
}
