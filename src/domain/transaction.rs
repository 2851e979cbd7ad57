use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Amount, SplitResult, compute_split};

/// A recorded split of one payment across its recipients.
/// Transactions are immutable once recorded and are never removed from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// 1-based position in the ledger, assigned on record
    pub sequence: usize,
    /// Total amount that was split
    pub amount: Amount,
    /// Percentage of each recipient, in input order
    pub shares: Vec<f64>,
    /// Formatted breakdown, e.g. "R500.00 (50%), R500.00 (50%)"
    pub split_details: String,
    /// Wall-clock time at which the split was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a transaction. The sequence number is assigned by the ledger.
    pub(crate) fn new(
        sequence: usize,
        amount: Amount,
        shares: Vec<f64>,
        currency_symbol: &str,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        let split_details = compute_split(amount, &shares).details(currency_symbol);
        Self {
            sequence,
            amount,
            shares,
            split_details,
            recorded_at,
        }
    }

    pub fn recipient_count(&self) -> usize {
        self.shares.len()
    }

    /// Recompute the per-recipient amounts of this transaction.
    pub fn split(&self) -> SplitResult {
        compute_split(self.amount, &self.shares)
    }

    /// Shares as displayed in the dashboard table, e.g. "50, 30, 20".
    pub fn shares_label(&self) -> String {
        self.shares
            .iter()
            .map(|p| super::format_percent(*p))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_split_details() {
        let tx = Transaction::new(1, 1000.0, vec![50.0, 30.0, 20.0], "R", Utc::now());

        assert_eq!(tx.sequence, 1);
        assert_eq!(tx.recipient_count(), 3);
        assert_eq!(
            tx.split_details,
            "R500.00 (50%), R300.00 (30%), R200.00 (20%)"
        );
        assert_eq!(tx.shares_label(), "50, 30, 20");
    }

    #[test]
    fn test_split_matches_details() {
        let tx = Transaction::new(2, 500.0, vec![60.0, 40.0], "$", Utc::now());
        let split = tx.split();

        assert_eq!(split.len(), 2);
        assert_eq!(split.details("$"), tx.split_details);
        assert_eq!(split.total(), 500.0);
    }
}
