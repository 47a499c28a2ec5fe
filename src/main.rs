//! Loan Amortization CLI
//!
//! Command-line interface for generating amortization schedules

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use loan_amortization::report::{render_table, to_json, write_csv};
use loan_amortization::{LoanForm, ScheduleConfig, ScheduleGenerator};
use loan_amortization::schedule::DEFAULT_MAX_PERIODS;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Aligned text table
    Table,
    /// Full schedule as JSON
    Json,
    /// Chart series as JSON
    Chart,
}

/// Generate the amortization schedule of a fixed-payment loan
#[derive(Parser, Debug)]
#[command(name = "loan_amortization")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Outstanding balance
    #[arg(short, long)]
    balance: String,

    /// Annual interest rate in percent (5 = 5%)
    #[arg(short, long)]
    rate: String,

    /// Payment frequency: weekly, monthly, quarterly, annually (or 0, 1, 3, 12)
    #[arg(short, long, default_value = "monthly")]
    frequency: String,

    /// Fixed payment per period
    #[arg(short, long)]
    payment: String,

    /// First payment date (YYYY-MM-DD)
    #[arg(short, long)]
    date: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Maximum table rows to print
    #[arg(long)]
    rows: Option<usize>,

    /// Also write the full schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Give up if the loan is not repaid within this many periods
    #[arg(long, default_value_t = DEFAULT_MAX_PERIODS)]
    max_periods: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let form = LoanForm {
        balance: cli.balance,
        rate_percent: cli.rate,
        frequency: cli.frequency,
        payment_amount: cli.payment,
        first_payment_date: cli.date,
    };
    let loan = form.parse().context("Invalid loan input")?;
    info!(
        "Amortizing {:.2} at {:.4}% with {} payments of {:.2} from {}",
        loan.balance,
        loan.annual_rate * 100.0,
        loan.frequency,
        loan.payment_amount,
        loan.first_payment_date
    );

    if !loan.is_repayable() {
        warn!(
            "Payment of {:.2} does not exceed first period interest of {:.2}",
            loan.payment_amount,
            loan.first_period_interest()
        );
    }

    let generator = ScheduleGenerator::new(ScheduleConfig {
        max_periods: cli.max_periods,
    });
    let schedule = generator
        .generate(&loan)
        .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))?;

    match cli.format {
        OutputFormat::Table => {
            let summary = schedule.summary();
            println!("Period rate: {:.6}%", schedule.period_rate * 100.0);
            println!();
            print!("{}", render_table(&schedule.periods, cli.rows));
            println!();
            println!("Summary:");
            println!("  Payments:        {}", summary.number_of_periods);
            println!("  Total Interest:  {:.2}", summary.total_interest);
            println!("  Total Paid:      {:.2}", summary.total_paid);
            println!("  Final Payment:   {:.2}", summary.final_payment);
            if let Some(payoff) = summary.final_payment_date {
                println!("  Payoff Date:     {}", payoff);
            }
        }
        OutputFormat::Json => {
            println!("{}", to_json(&schedule).context("Failed to serialize schedule")?);
        }
        OutputFormat::Chart => {
            let chart = serde_json::to_string_pretty(&schedule.chart_data())
                .context("Failed to serialize chart data")?;
            println!("{}", chart);
        }
    }

    if let Some(path) = cli.csv {
        let file = File::create(&path).with_context(|| format!("Unable to create {}", path.display()))?;
        write_csv(&schedule.periods, BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Schedule written to {}", path.display());
    }

    Ok(())
}
