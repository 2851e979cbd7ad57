use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, format_money, format_percent};

/// The sum every split's shares must reach, exactly.
pub const FULL_PERCENT: f64 = 100.0;

/// One computed line of a split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitLine {
    /// 1-based position of the recipient in the input list
    pub recipient_index: usize,
    pub percent: f64,
    /// `total * percent / 100`, unrounded
    pub amount: Amount,
}

/// Per-recipient amounts of a split, in input order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitResult {
    lines: Vec<SplitLine>,
}

impl SplitResult {
    pub fn lines(&self) -> &[SplitLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of every recipient's amount.
    pub fn total(&self) -> Amount {
        self.lines.iter().map(|line| line.amount).sum()
    }

    /// Human-readable breakdown, e.g. "R500.00 (50%), R500.00 (50%)".
    pub fn details(&self, currency_symbol: &str) -> String {
        self.lines
            .iter()
            .map(|line| {
                format!(
                    "{} ({}%)",
                    format_money(currency_symbol, line.amount),
                    format_percent(line.percent)
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl IntoIterator for SplitResult {
    type Item = SplitLine;
    type IntoIter = std::vec::IntoIter<SplitLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

/// Check that the shares add up to exactly 100.
///
/// The comparison is exact equality on `f64`, with no tolerance. Shares are
/// summed left to right starting from zero, so an empty list fails (0 != 100).
/// Individual shares are not range-checked: `[150, -50]` is valid.
pub fn validate(shares: &[f64]) -> Result<(), SplitError> {
    if let Some(bad) = shares.iter().find(|p| !p.is_finite()) {
        return Err(SplitError::InvalidInput(format!(
            "percentage {} is not a number",
            bad
        )));
    }

    let total = shares.iter().fold(0.0, |acc, p| acc + p);
    if total != FULL_PERCENT {
        return Err(SplitError::PercentSumMismatch { total });
    }
    Ok(())
}

/// Compute every recipient's amount. Callers must validate the shares first.
pub fn compute_split(amount: Amount, shares: &[f64]) -> SplitResult {
    let lines = shares
        .iter()
        .enumerate()
        .map(|(i, &percent)| SplitLine {
            recipient_index: i + 1,
            percent,
            amount: amount * percent / FULL_PERCENT,
        })
        .collect();
    SplitResult { lines }
}

/// Validate the inputs, then compute the split.
pub fn split(amount: Amount, shares: &[f64]) -> Result<SplitResult, SplitError> {
    if !amount.is_finite() {
        return Err(SplitError::InvalidInput(format!(
            "amount {} is not a number",
            amount
        )));
    }
    validate(shares)?;
    Ok(compute_split(amount, shares))
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplitError {
    /// Shares did not sum to exactly 100
    PercentSumMismatch { total: f64 },
    /// Amount or a share was NaN or infinite
    InvalidInput(String),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::PercentSumMismatch { total } => {
                write!(
                    f,
                    "Percentages must add up to 100% (got {}%)",
                    format_percent(*total)
                )
            }
            SplitError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
        }
    }
}

impl std::error::Error for SplitError {}
