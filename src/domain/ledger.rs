use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Amount, DEFAULT_CURRENCY_SYMBOL, Transaction};

/// Demo splits the dashboard starts with when sample data is requested.
pub const SAMPLE_SPLITS: &[(Amount, &[f64])] = &[
    (1000.0, &[50.0, 30.0, 20.0]),
    (500.0, &[60.0, 40.0]),
    (2000.0, &[70.0, 20.0, 10.0]),
];

/// Summary counters over every recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerAggregate {
    pub transaction_count: usize,
    pub total_recipients: usize,
    pub total_amount: Amount,
}

/// Compute the aggregate counters from a list of transactions.
pub fn compute_aggregate(transactions: &[Transaction]) -> LedgerAggregate {
    transactions
        .iter()
        .fold(LedgerAggregate::default(), |agg, tx| LedgerAggregate {
            transaction_count: agg.transaction_count + 1,
            total_recipients: agg.total_recipients + tx.recipient_count(),
            total_amount: agg.total_amount + tx.amount,
        })
}

/// Append-only, in-memory log of recorded splits.
///
/// The ledger lives as long as its owner; there is no way to remove or
/// rewrite an entry once recorded.
#[derive(Debug, Clone)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
    currency_symbol: String,
}

impl Default for TransactionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionLedger {
    /// Create an empty ledger using the default currency symbol.
    pub fn new() -> Self {
        Self::with_currency_symbol(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Create an empty ledger that formats split details with `symbol`.
    pub fn with_currency_symbol(symbol: impl Into<String>) -> Self {
        Self {
            transactions: Vec::new(),
            currency_symbol: symbol.into(),
        }
    }

    /// Seed this ledger with the demo splits.
    pub fn with_sample_data(mut self) -> Self {
        for (amount, shares) in SAMPLE_SPLITS {
            self.record(*amount, shares);
        }
        self
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Append a new transaction stamped with the current time.
    ///
    /// Shares are not validated here; callers validate before recording.
    pub fn record(&mut self, amount: Amount, shares: &[f64]) -> &Transaction {
        let tx = Transaction::new(
            self.transactions.len() + 1,
            amount,
            shares.to_vec(),
            &self.currency_symbol,
            Utc::now(),
        );
        log::debug!(
            "Recorded transaction #{}: {} -> {}",
            tx.sequence,
            amount,
            tx.split_details
        );
        self.transactions.push(tx);
        &self.transactions[self.transactions.len() - 1]
    }

    pub fn aggregate(&self) -> LedgerAggregate {
        compute_aggregate(&self.transactions)
    }

    /// All transactions in the order they were recorded.
    pub fn all_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let ledger = TransactionLedger::new();

        assert!(ledger.is_empty());
        assert_eq!(ledger.aggregate(), LedgerAggregate::default());
        assert!(ledger.all_transactions().is_empty());
        assert_eq!(ledger.currency_symbol(), "R");
    }

    #[test]
    fn test_record_single() {
        let mut ledger = TransactionLedger::new();
        let tx = ledger.record(2000.0, &[70.0, 20.0, 10.0]).clone();

        assert_eq!(tx.sequence, 1);
        assert_eq!(tx.amount, 2000.0);
        assert_eq!(tx.shares, vec![70.0, 20.0, 10.0]);
        assert_eq!(
            tx.split_details,
            "R1400.00 (70%), R400.00 (20%), R200.00 (10%)"
        );

        let all = ledger.all_transactions();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], tx);
    }

    #[test]
    fn test_aggregate_two_records() {
        let mut ledger = TransactionLedger::new();
        ledger.record(1000.0, &[50.0, 30.0, 20.0]);
        ledger.record(500.0, &[60.0, 40.0]);

        assert_eq!(
            ledger.aggregate(),
            LedgerAggregate {
                transaction_count: 2,
                total_recipients: 5,
                total_amount: 1500.0,
            }
        );
    }

    #[test]
    fn test_record_preserves_order_and_prior_entries() {
        let mut ledger = TransactionLedger::new();
        ledger.record(10.0, &[100.0]);
        let first = ledger.all_transactions()[0].clone();

        ledger.record(20.0, &[50.0, 50.0]);
        ledger.record(30.0, &[25.0, 75.0]);

        let amounts: Vec<f64> = ledger.all_transactions().iter().map(|t| t.amount).collect();
        let sequences: Vec<usize> = ledger
            .all_transactions()
            .iter()
            .map(|t| t.sequence)
            .collect();

        assert_eq!(amounts, vec![10.0, 20.0, 30.0]);
        assert_eq!(sequences, vec![1, 2, 3]);
        assert_eq!(ledger.all_transactions()[0], first);
    }

    #[test]
    fn test_record_does_not_validate() {
        let mut ledger = TransactionLedger::new();
        ledger.record(100.0, &[60.0, 40.0, 5.0]);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.aggregate().total_recipients, 3);
    }

    #[test]
    fn test_custom_currency_symbol() {
        let mut ledger = TransactionLedger::with_currency_symbol("€");
        let tx = ledger.record(10.0, &[50.0, 50.0]);

        assert_eq!(tx.split_details, "€5.00 (50%), €5.00 (50%)");
    }

    #[test]
    fn test_sample_data() {
        let ledger = TransactionLedger::new().with_sample_data();

        assert_eq!(
            ledger.aggregate(),
            LedgerAggregate {
                transaction_count: 3,
                total_recipients: 8,
                total_amount: 3500.0,
            }
        );
    }

    #[test]
    fn test_compute_aggregate_matches_ledger() {
        let mut ledger = TransactionLedger::new();
        ledger.record(1.5, &[100.0]);
        ledger.record(2.5, &[40.0, 60.0]);

        assert_eq!(
            compute_aggregate(ledger.all_transactions()),
            ledger.aggregate()
        );
        assert_eq!(ledger.aggregate().total_amount, 4.0);
    }
}
