//! OFX/SGML 1.02 document rendering.
//!
//! The document is assembled in memory and only handed to the writer once
//! every transaction has rendered, so a bad row never leaves a truncated file
//! behind.

use std::io::Write;

use encoding_rs::WINDOWS_1252;
use tracing::{debug, warn};

use crate::error::Result;
use crate::statement::Statement;
use crate::transaction::format_date;

const OFX_PREAMBLE: &str = "OFXHEADER:100
DATA:OFXSGML
VERSION:102
SECURITY:NONE
ENCODING:USASCII
CHARSET:1252
COMPRESSION:NONE
OLDFILEUID:NONE
NEWFILEUID:NONE";

/// Values the export does not carry, filled into the statement header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfxDefaults {
    pub bank_id: String,
    pub account_type: String,
    pub currency: String,
}

impl Default for OfxDefaults {
    fn default() -> Self {
        Self {
            // Busey Bank routing number
            bank_id: "071102568".to_string(),
            account_type: "CHECKING".to_string(),
            currency: "USD".to_string(),
        }
    }
}

fn ofx_header(defaults: &OfxDefaults, account_id: &str, start_date: &str, end_date: &str) -> String {
    format!(
        "<OFX>
<BANKMSGSRSV1>
<STMTTRNRS>
<STMTRS>
<CURDEF>{currency}</CURDEF>
<BANKACCTFROM>
<BANKID>{bank_id}</BANKID>
<ACCTID>{account_id}</ACCTID>
<ACCTTYPE>{account_type}</ACCTTYPE>
</BANKACCTFROM>
<BANKTRANLIST>
<DTSTART>{start_date}</DTSTART>
<DTEND>{end_date}</DTEND>",
        currency = defaults.currency,
        bank_id = defaults.bank_id,
        account_type = defaults.account_type,
    )
}

fn ofx_footer(balance: &str, end_date: &str) -> String {
    format!(
        "</BANKTRANLIST>
<LEDGERBAL>
<BALAMT>{balance}</BALAMT>
<DTASOF>{end_date}</DTASOF>
</LEDGERBAL>
<AVAILBAL>
<BALAMT>{balance}</BALAMT>
<DTASOF>{end_date}</DTASOF>
</AVAILBAL>
</STMTRS>
</STMTTRNRS>
</BANKMSGSRSV1>
</OFX>"
    )
}

/// Render the full OFX document for a statement.
pub fn render_statement(statement: &Statement, defaults: &OfxDefaults) -> Result<String> {
    let start_date = format_date(statement.start_date())?;
    let end_date = format_date(statement.end_date())?;

    let mut blocks = Vec::with_capacity(statement.len() + 3);
    blocks.push(OFX_PREAMBLE.to_string());
    blocks.push(ofx_header(defaults, statement.account_id(), &start_date, &end_date));
    for txn in statement.transactions() {
        blocks.push(txn.to_ofx()?);
    }
    blocks.push(ofx_footer(statement.closing_balance(), &end_date));

    debug!(
        account = statement.account_id(),
        transactions = statement.len(),
        "rendered ofx document"
    );

    let mut out = blocks.join("\n");
    out.push('\n');
    Ok(out)
}

/// Render a statement and write the finished document to `writer`, encoded as
/// windows-1252 to match the `CHARSET:1252` header.
pub fn write_statement(
    statement: &Statement,
    defaults: &OfxDefaults,
    mut writer: impl Write,
) -> Result<()> {
    let doc = render_statement(statement, defaults)?;
    let (bytes, _, unmappable) = WINDOWS_1252.encode(&doc);
    if unmappable {
        warn!("characters outside windows-1252 written as numeric character references");
    }
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
