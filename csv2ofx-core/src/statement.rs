use crate::error::{Error, Result};
use crate::transaction::Transaction;

/// One account's transactions in input order, plus the metadata derived from them.
///
/// Always holds at least one transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    account_id: String,
    transactions: Vec<Transaction>,
}

impl Statement {
    pub fn new(account_id: impl Into<String>, transactions: Vec<Transaction>) -> Result<Self> {
        if transactions.is_empty() {
            return Err(Error::NoTransactions);
        }
        Ok(Self {
            account_id: account_id.into(),
            transactions,
        })
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn first(&self) -> &Transaction {
        &self.transactions[0]
    }

    fn last(&self) -> &Transaction {
        &self.transactions[self.transactions.len() - 1]
    }

    /// Date of the first transaction (`MM/DD/YYYY`).
    pub fn start_date(&self) -> &str {
        &self.first().date
    }

    /// Date of the last transaction (`MM/DD/YYYY`).
    pub fn end_date(&self) -> &str {
        &self.last().date
    }

    /// Running balance after the last transaction.
    pub fn closing_balance(&self) -> &str {
        &self.last().balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statement_rejected() {
        let res = Statement::new("123456789", Vec::new());
        assert!(matches!(res, Err(Error::NoTransactions)));
    }

    #[test]
    fn test_metadata_from_first_and_last() {
        let stmt = Statement::new(
            "123456789",
            vec![
                Transaction::new("1", "01/02/2009", 50.0, "150.00"),
                Transaction::new("2", "01/03/2009", -20.0, "130.00"),
                Transaction::new("3", "01/05/2009", -5.0, "125.00"),
            ],
        )
        .unwrap();

        assert_eq!(stmt.account_id(), "123456789");
        assert_eq!(stmt.len(), 3);
        assert_eq!(stmt.start_date(), "01/02/2009");
        assert_eq!(stmt.end_date(), "01/05/2009");
        assert_eq!(stmt.closing_balance(), "125.00");
    }

    #[test]
    fn test_single_transaction_is_start_and_end() {
        let stmt =
            Statement::new("42", vec![Transaction::new("9", "02/16/2009", 1.0, "1.00")]).unwrap();
        assert_eq!(stmt.start_date(), stmt.end_date());
        assert_eq!(stmt.closing_balance(), "1.00");
    }
}
