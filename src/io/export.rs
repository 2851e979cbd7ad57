use anyhow::{Context, Result};
use std::io::Write;

use crate::application::{DashboardReport, SplitService};

/// Exporter for rendering the dashboard into machine-readable formats
pub struct Exporter<'a> {
    service: &'a SplitService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a SplitService) -> Self {
        Self { service }
    }

    /// Export the transaction table to CSV format
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "sequence",
            "amount",
            "shares",
            "split_details",
            "recorded_at",
        ])?;

        let mut count = 0;
        for tx in self.service.all_transactions() {
            let shares = tx
                .shares
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(";");

            csv_writer.write_record([
                tx.sequence.to_string(),
                tx.amount.to_string(),
                shares,
                tx.split_details.clone(),
                tx.recorded_at.to_rfc3339(),
            ])?;
            count += 1;
        }

        csv_writer.flush().context("Failed to flush CSV output")?;
        Ok(count)
    }

    /// Export summary and table as a JSON document
    pub fn export_dashboard_json<W: Write>(&self, mut writer: W) -> Result<DashboardReport> {
        let report = DashboardReport::build(
            self.service.currency_symbol(),
            self.service.aggregate(),
            self.service.all_transactions(),
        );

        let json = serde_json::to_string_pretty(&report)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(report)
    }
}
