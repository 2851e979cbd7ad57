use chrono::Local;
use std::io::{self, Write};

use crate::application::{AppError, SplitView};
use crate::domain::{LedgerAggregate, SplitResult, Transaction, format_money, format_percent};

/// Renders splits and the dashboard as plain text tables.
pub struct TerminalView<W: Write> {
    out: W,
    currency_symbol: String,
    io_error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, currency_symbol: &str) -> Self {
        Self {
            out,
            currency_symbol: currency_symbol.to_string(),
            io_error: None,
        }
    }

    /// Flush the output and report the first write failure, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.io_error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_lines(&mut self, lines: Vec<String>) {
        if self.io_error.is_some() {
            return;
        }
        for line in lines {
            if let Err(err) = writeln!(self.out, "{}", line) {
                self.io_error = Some(err);
                return;
            }
        }
    }

    fn money(&self, amount: f64) -> String {
        format_money(&self.currency_symbol, amount)
    }
}

impl<W: Write> SplitView for TerminalView<W> {
    fn render_split(&mut self, result: &SplitResult) {
        let mut lines = vec!["Split Results:".to_string()];
        for line in result.lines() {
            lines.push(format!(
                "  Recipient {}: {} ({}%)",
                line.recipient_index,
                self.money(line.amount),
                format_percent(line.percent)
            ));
        }
        self.write_lines(lines);
    }

    fn render_error(&mut self, error: &AppError) {
        self.write_lines(vec![format!("Error: {}", error)]);
    }

    fn render_dashboard(&mut self, aggregate: &LedgerAggregate, transactions: &[Transaction]) {
        let mut lines = vec![
            format!("Total transactions: {}", aggregate.transaction_count),
            format!("Total recipients:   {}", aggregate.total_recipients),
            format!("Total amount:       {}", self.money(aggregate.total_amount)),
            String::new(),
        ];

        if transactions.is_empty() {
            lines.push("No transactions recorded.".to_string());
        } else {
            lines.push(format!(
                "{:<4} {:>12} {:<16} {:<48} DATE",
                "#", "AMOUNT", "SHARES", "SPLIT DETAILS"
            ));
            lines.push("-".repeat(104));
            for tx in transactions {
                let date = tx.recorded_at.with_timezone(&Local);
                lines.push(format!(
                    "{:<4} {:>12} {:<16} {:<48} {}",
                    tx.sequence,
                    self.money(tx.amount),
                    truncate(&tx.shares_label(), 16),
                    truncate(&tx.split_details, 48),
                    date.format("%Y-%m-%d %H:%M:%S")
                ));
            }
        }
        self.write_lines(lines);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
