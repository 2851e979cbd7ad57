use crate::domain::{
    Amount, LedgerAggregate, SplitResult, Transaction, TransactionLedger, parse_amount,
    parse_shares, split,
};

use super::{AppError, SplitView};

/// Application service behind the split form and the dashboard.
/// This is the primary interface for any client (CLI, TUI, tests, etc.).
///
/// The service owns its ledger; nothing else can reach it.
pub struct SplitService {
    ledger: TransactionLedger,
}

/// Result of a successful form submission
#[derive(Debug, Clone)]
pub struct SubmitResult {
    pub split: SplitResult,
    pub transaction: Transaction,
    pub aggregate: LedgerAggregate,
}

impl Default for SplitService {
    fn default() -> Self {
        Self::new(TransactionLedger::new())
    }
}

impl SplitService {
    /// Create a service around an existing ledger.
    pub fn new(ledger: TransactionLedger) -> Self {
        Self { ledger }
    }

    /// Create a service with an empty ledger using `currency_symbol`.
    pub fn with_currency_symbol(currency_symbol: &str) -> Self {
        Self::new(TransactionLedger::with_currency_symbol(currency_symbol))
    }

    pub fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    pub fn currency_symbol(&self) -> &str {
        self.ledger.currency_symbol()
    }

    // ========================
    // Split operations
    // ========================

    /// Parse the raw form fields and compute the split without recording it.
    pub fn preview(&self, amount_text: &str, recipients_text: &str) -> Result<SplitResult, AppError> {
        let amount = parse_amount(amount_text)?;
        let shares = parse_shares(recipients_text)?;
        self.preview_split(amount, &shares)
    }

    /// Compute a split from already parsed values without recording it.
    pub fn preview_split(&self, amount: Amount, shares: &[f64]) -> Result<SplitResult, AppError> {
        let result = split(amount, shares)?;
        log::debug!("Computed split of {} across {} recipients", amount, result.len());
        Ok(result)
    }

    /// Parse the raw form fields, validate, compute, and record the split.
    pub fn submit(
        &mut self,
        amount_text: &str,
        recipients_text: &str,
    ) -> Result<SubmitResult, AppError> {
        let amount = parse_amount(amount_text)?;
        let shares = parse_shares(recipients_text)?;
        self.submit_split(amount, &shares)
    }

    /// Validate, compute, and record a split from already parsed values.
    pub fn submit_split(&mut self, amount: Amount, shares: &[f64]) -> Result<SubmitResult, AppError> {
        let split = self.preview_split(amount, shares)?;
        let transaction = self.ledger.record(amount, shares).clone();

        Ok(SubmitResult {
            split,
            transaction,
            aggregate: self.ledger.aggregate(),
        })
    }

    // ========================
    // View-driven operations
    // ========================

    /// Handle a split-form submission, rendering the outcome into `view`.
    ///
    /// On success the view receives the split and then the refreshed dashboard.
    /// On failure it receives the error and the ledger is unchanged.
    pub fn handle_submit<V: SplitView + ?Sized>(
        &mut self,
        amount_text: &str,
        recipients_text: &str,
        view: &mut V,
    ) -> Option<SubmitResult> {
        match self.submit(amount_text, recipients_text) {
            Ok(result) => {
                view.render_split(&result.split);
                self.render_dashboard(view);
                Some(result)
            }
            Err(err) => {
                log::warn!("Rejected split ({} / {}): {}", amount_text, recipients_text, err);
                view.render_error(&err);
                None
            }
        }
    }

    /// Handle a preview request, rendering the split or the error into `view`.
    pub fn handle_preview<V: SplitView + ?Sized>(
        &self,
        amount_text: &str,
        recipients_text: &str,
        view: &mut V,
    ) -> Option<SplitResult> {
        match self.preview(amount_text, recipients_text) {
            Ok(result) => {
                view.render_split(&result);
                Some(result)
            }
            Err(err) => {
                log::warn!("Rejected split ({} / {}): {}", amount_text, recipients_text, err);
                view.render_error(&err);
                None
            }
        }
    }

    /// Push the current aggregate and transaction table into `view`.
    pub fn render_dashboard<V: SplitView + ?Sized>(&self, view: &mut V) {
        view.render_dashboard(&self.ledger.aggregate(), self.ledger.all_transactions());
    }

    // ========================
    // Dashboard queries
    // ========================

    pub fn aggregate(&self) -> LedgerAggregate {
        self.ledger.aggregate()
    }

    pub fn all_transactions(&self) -> &[Transaction] {
        self.ledger.all_transactions()
    }
}
