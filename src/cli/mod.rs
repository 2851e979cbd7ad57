use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Write, stdout};
use std::process::ExitCode;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::application::{SplitService, SplitView};
use crate::domain::{DEFAULT_CURRENCY_SYMBOL, TransactionLedger};

mod terminal;

pub use terminal::TerminalView;

/// Paysplit - split payments across recipients by percentage
#[derive(Parser)]
#[command(name = "paysplit")]
#[command(about = "Split payments across recipients and keep a dashboard of splits")]
#[command(version)]
pub struct Cli {
    /// Currency symbol shown in front of amounts
    #[arg(short, long, global = true, default_value = DEFAULT_CURRENCY_SYMBOL)]
    pub currency: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split one payment and show each recipient's share (nothing is recorded)
    Split {
        /// Amount to split (e.g., "1000" or "99.95")
        #[arg(short, long)]
        amount: String,

        /// Comma-separated percentages that add up to 100 (e.g., "50,30,20")
        #[arg(short, long)]
        recipients: String,
    },

    /// Record splits and show the dashboard summary and table
    Dashboard {
        /// Start from the demo transactions
        #[arg(long)]
        sample: bool,

        /// Split to record, as AMOUNT:PERCENTS (e.g., "1000:50,30,20"); repeatable
        #[arg(long = "split", value_name = "AMOUNT:PERCENTS")]
        splits: Vec<String>,

        /// Output format: table, json, csv
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Interactive session: enter splits one per line and watch the dashboard grow
    Session {
        /// Start from the demo transactions
        #[arg(long)]
        sample: bool,
    },
}

impl Cli {
    fn service(&self, sample: bool) -> SplitService {
        let ledger = TransactionLedger::with_currency_symbol(self.currency.as_str());
        let ledger = if sample {
            ledger.with_sample_data()
        } else {
            ledger
        };
        SplitService::new(ledger)
    }

    pub async fn run(self) -> Result<ExitCode> {
        match &self.command {
            Commands::Split { amount, recipients } => {
                let service = self.service(false);
                let mut view = TerminalView::new(stdout(), &self.currency);
                let accepted = service.handle_preview(amount, recipients, &mut view).is_some();
                view.finish().context("Failed to write output")?;

                if !accepted {
                    return Ok(ExitCode::FAILURE);
                }
            }

            Commands::Dashboard {
                sample,
                splits,
                format,
                output,
            } => {
                let mut service = self.service(*sample);
                let mut view = TerminalView::new(stdout(), &self.currency);
                let accepted = record_splits(&mut service, splits, &mut view)?;
                view.finish().context("Failed to write output")?;

                if !accepted {
                    return Ok(ExitCode::FAILURE);
                }
                write_dashboard(&service, format, output.as_deref())?;
            }

            Commands::Session { sample } => {
                let mut service = self.service(*sample);
                let mut view = TerminalView::new(stdout(), &self.currency);
                eprintln!("Enter '<amount> <percent,percent,...>', 'dashboard', or 'quit'.");

                let stdin = BufReader::new(tokio::io::stdin());
                let accepted = run_session(&mut service, stdin, &mut view).await?;
                view.finish().context("Failed to write output")?;

                if self.verbose {
                    eprintln!("Session ended after {} recorded split(s)", accepted);
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// Drive a session from line-based input.
///
/// Each line is either a split (`<amount> <percents>`), `dashboard`, or
/// `quit`/`exit`. Rejected splits are rendered and the session goes on.
/// Returns the number of recorded splits.
pub async fn run_session<R, V>(
    service: &mut SplitService,
    input: R,
    view: &mut V,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    V: SplitView + ?Sized,
{
    let mut lines = input.lines();
    let mut accepted = 0;

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "dashboard" => service.render_dashboard(view),
            _ => {
                let (amount, recipients) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
                if service.handle_submit(amount, recipients, view).is_some() {
                    accepted += 1;
                }
            }
        }
    }

    Ok(accepted)
}

/// Output formats of the `dashboard` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardFormat {
    Table,
    Json,
    Csv,
}

impl DashboardFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(DashboardFormat::Table),
            "json" => Some(DashboardFormat::Json),
            "csv" => Some(DashboardFormat::Csv),
            _ => None,
        }
    }
}

/// Split an `AMOUNT:PERCENTS` argument into its amount and recipients text.
/// Example: "1000:50,30,20" -> ("1000", "50,30,20")
pub fn parse_split_arg(arg: &str) -> Result<(&str, &str)> {
    arg.split_once(':').with_context(|| {
        format!(
            "Invalid split '{}'. Use AMOUNT:PERCENTS, e.g. 1000:50,30,20",
            arg
        )
    })
}

/// Record `AMOUNT:PERCENTS` splits in order.
///
/// The first rejected split is rendered into `view` and stops the run;
/// splits recorded before it stay in the ledger. Returns whether every
/// split was recorded. A malformed argument is an error, not a rejection.
pub fn record_splits<V>(service: &mut SplitService, args: &[String], view: &mut V) -> Result<bool>
where
    V: SplitView + ?Sized,
{
    for arg in args {
        let (amount, recipients) = parse_split_arg(arg)?;
        if let Err(err) = service.submit(amount, recipients) {
            log::warn!("Rejected split '{}': {}", arg, err);
            view.render_error(&err);
            return Ok(false);
        }
    }
    Ok(true)
}

/// Write the dashboard in `format` to the file at `output`, or to stdout.
pub fn write_dashboard(service: &SplitService, format: &str, output: Option<&str>) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;

    // Check the format before touching the output file
    let format = DashboardFormat::from_str(format).with_context(|| {
        format!("Unknown format '{}'. Valid formats: table, json, csv", format)
    })?;

    // Determine output writer
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match format {
        DashboardFormat::Table => {
            let mut view = TerminalView::new(writer, service.currency_symbol());
            service.render_dashboard(&mut view);
            view.finish().context("Failed to write output")?;
        }
        DashboardFormat::Csv => {
            let count = Exporter::new(service).export_transactions_csv(writer)?;
            if output.is_some() {
                eprintln!("Exported {} transactions", count);
            }
        }
        DashboardFormat::Json => {
            let report = Exporter::new(service).export_dashboard_json(writer)?;
            if output.is_some() {
                eprintln!("Exported dashboard with {} transactions", report.rows.len());
            }
        }
    }

    Ok(())
}
