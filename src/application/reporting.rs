use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Amount, LedgerAggregate, Transaction, format_money};

/// The dashboard as plain data: summary counters plus one row per transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub currency_symbol: String,
    pub summary: LedgerAggregate,
    pub rows: Vec<DashboardRow>,
}

/// One line of the transaction table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRow {
    pub sequence: usize,
    pub amount: Amount,
    pub shares: Vec<f64>,
    pub split_details: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<&Transaction> for DashboardRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            sequence: tx.sequence,
            amount: tx.amount,
            shares: tx.shares.clone(),
            split_details: tx.split_details.clone(),
            recorded_at: tx.recorded_at,
        }
    }
}

impl DashboardReport {
    pub fn build(
        currency_symbol: &str,
        aggregate: LedgerAggregate,
        transactions: &[Transaction],
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            currency_symbol: currency_symbol.to_string(),
            summary: aggregate,
            rows: transactions.iter().map(DashboardRow::from).collect(),
        }
    }

    /// Total amount with currency, e.g. "R3500.00".
    pub fn total_amount_label(&self) -> String {
        format_money(&self.currency_symbol, self.summary.total_amount)
    }
}
