use crate::domain::{LedgerAggregate, SplitResult, Transaction};

use super::AppError;

/// Output channel of the presentation layer.
///
/// The service pushes plain data through these callbacks and never knows how
/// it ends up on screen.
pub trait SplitView {
    /// Show the per-recipient breakdown of a split.
    fn render_split(&mut self, result: &SplitResult);

    /// Show a rejected submission. The ledger is left untouched.
    fn render_error(&mut self, error: &AppError);

    /// Show the summary counters and the full transaction table.
    fn render_dashboard(&mut self, aggregate: &LedgerAggregate, transactions: &[Transaction]);
}

/// A view that remembers what it was asked to render.
///
/// Useful for tests and for hosts that poll for output instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub splits: Vec<SplitResult>,
    pub errors: Vec<String>,
    pub dashboards: Vec<(LedgerAggregate, usize)>,
}

impl SplitView for RecordingView {
    fn render_split(&mut self, result: &SplitResult) {
        self.splits.push(result.clone());
    }

    fn render_error(&mut self, error: &AppError) {
        self.errors.push(error.to_string());
    }

    fn render_dashboard(&mut self, aggregate: &LedgerAggregate, transactions: &[Transaction]) {
        self.dashboards.push((*aggregate, transactions.len()));
    }
}
