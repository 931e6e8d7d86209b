//! A single parsed statement row and its `<STMTTRN>` rendering.

use std::fmt;

use crate::error::{Error, Result};

/// OFX `TRNTYPE` value. The Busey export carries no type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionType {
    #[default]
    Other,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Other => "OTHER",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Transaction number as given by the bank; not checked for uniqueness.
    pub id: String,
    /// `MM/DD/YYYY`, kept verbatim until render time.
    pub date: String,
    pub description: String,
    pub memo: String,
    /// Credit minus debit.
    pub amount: f64,
    /// Running balance after this transaction, verbatim from the source.
    pub balance: String,
    pub kind: TransactionType,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        amount: f64,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            description: String::new(),
            memo: String::new(),
            amount,
            balance: balance.into(),
            kind: TransactionType::Other,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Render as an OFX `<STMTTRN>` block.
    pub fn to_ofx(&self) -> Result<String> {
        Ok(format!(
            "<STMTTRN>\n\
             <TRNTYPE>{}</TRNTYPE>\n\
             <DTPOSTED>{}</DTPOSTED>\n\
             <TRNAMT>{}</TRNAMT>\n\
             <FITID>{}</FITID>\n\
             <NAME>{}</NAME>\n\
             <MEMO>{}</MEMO>\n\
             </STMTTRN>",
            self.kind,
            format_date(&self.date)?,
            format_amount(self.amount),
            self.id,
            self.description,
            self.memo,
        ))
    }
}

/// `MM/DD/YYYY` -> `YYYYMMDD000000`.
///
/// Purely textual: the parts are reordered as-is, without calendar checks.
pub fn format_date(date: &str) -> Result<String> {
    let parts: Vec<&str> = date.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(Error::InvalidDate {
            date: date.to_string(),
        });
    };
    Ok(format!("{year}{month}{day}000000"))
}

/// Shortest round-trip rendering that always keeps a fractional part.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("03/05/2009").unwrap(), "20090305000000");
        assert_eq!(format_date("12/31/2010").unwrap(), "20101231000000");
    }

    #[test]
    fn test_format_date_rejects_wrong_separator_count() {
        assert!(matches!(
            format_date("2009-03-05"),
            Err(Error::InvalidDate { .. })
        ));
        assert!(matches!(
            format_date("03/05/2009/1"),
            Err(Error::InvalidDate { .. })
        ));
        assert!(matches!(format_date(""), Err(Error::InvalidDate { .. })));
    }

    #[test]
    fn test_format_amount_keeps_fraction() {
        assert_eq!(format_amount(50.0), "50.0");
        assert_eq!(format_amount(-5.0), "-5.0");
        assert_eq!(format_amount(-12.5), "-12.5");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(1234.56), "1234.56");
    }

    #[test]
    fn test_to_ofx_fragment() {
        let txn = Transaction::new("17", "01/05/2009", -5.0, "145.00")
            .with_description("Coffee")
            .with_memo("POS 1234");

        let expected = "<STMTTRN>\n\
                        <TRNTYPE>OTHER</TRNTYPE>\n\
                        <DTPOSTED>20090105000000</DTPOSTED>\n\
                        <TRNAMT>-5.0</TRNAMT>\n\
                        <FITID>17</FITID>\n\
                        <NAME>Coffee</NAME>\n\
                        <MEMO>POS 1234</MEMO>\n\
                        </STMTTRN>";
        assert_eq!(txn.to_ofx().unwrap(), expected);
    }

    #[test]
    fn test_to_ofx_bad_date() {
        let txn = Transaction::new("1", "01-05-2009", 1.0, "1.00");
        assert!(txn.to_ofx().is_err());
    }
}
