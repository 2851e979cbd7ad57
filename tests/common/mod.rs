// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use paysplit::application::SplitService;
use paysplit::domain::TransactionLedger;

/// Demo splits as (amount text, recipients text), the way a user types them
pub const SAMPLE_FORMS: &[(&str, &str)] = &[
    ("1000", "50,30,20"),
    ("500", "60,40"),
    ("2000", "70,20,10"),
];

/// Helper to create a service with an empty ledger
pub fn test_service() -> SplitService {
    SplitService::new(TransactionLedger::new())
}

/// Helper to create a service pre-filled with the demo splits
pub fn sample_service() -> Result<SplitService> {
    let mut service = test_service();
    for (amount, recipients) in SAMPLE_FORMS {
        service.submit(amount, recipients)?;
    }
    Ok(service)
}

/// Compare floats that went through arithmetic
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be close to {}",
        actual,
        expected
    );
}
