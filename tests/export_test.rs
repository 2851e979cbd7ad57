mod common;

use anyhow::Result;
use common::{sample_service, test_service};
use paysplit::application::DashboardReport;
use paysplit::io::Exporter;
use tempfile::TempDir;

#[test]
fn test_export_transactions_csv() -> Result<()> {
    let service = sample_service()?;
    let mut buffer = Vec::new();

    let count = Exporter::new(&service).export_transactions_csv(&mut buffer)?;
    assert_eq!(count, 3);

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers = reader.headers()?.clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["sequence", "amount", "shares", "split_details", "recorded_at"]
    );

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][0], "1");
    assert_eq!(&records[0][1], "1000");
    assert_eq!(&records[0][2], "50;30;20");
    assert_eq!(&records[0][3], "R500.00 (50%), R300.00 (30%), R200.00 (20%)");
    assert_eq!(&records[1][2], "60;40");

    Ok(())
}

#[test]
fn test_export_empty_csv_has_header_only() -> Result<()> {
    let service = test_service();
    let mut buffer = Vec::new();

    let count = Exporter::new(&service).export_transactions_csv(&mut buffer)?;

    assert_eq!(count, 0);
    assert_eq!(
        String::from_utf8(buffer)?,
        "sequence,amount,shares,split_details,recorded_at\n"
    );

    Ok(())
}

#[test]
fn test_export_dashboard_json_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dashboard.json");
    let service = sample_service()?;

    let file = std::fs::File::create(&path)?;
    let exported = Exporter::new(&service).export_dashboard_json(file)?;

    let contents = std::fs::read_to_string(&path)?;
    let report: DashboardReport = serde_json::from_str(&contents)?;

    assert_eq!(report.summary, service.aggregate());
    assert_eq!(report.rows, exported.rows);
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.rows[2].shares, vec![70.0, 20.0, 10.0]);
    assert_eq!(report.currency_symbol, "R");
    assert_eq!(report.total_amount_label(), "R3500.00");

    Ok(())
}
