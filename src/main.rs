use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expense_tracker::config::{ExportFormat, Settings, Variant, DEFAULT_CURRENCY};
use expense_tracker::setup::Prompter;
use expense_tracker::tracker;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Monthly expense tracker with budget alerts",
    long_about = "Records one month of spending per category, prints the total, \
                  average, highest and lowest category, and alerts on every \
                  category that went over its budget limit."
)]
struct Cli {
    /// Use the five built-in categories and limits instead of asking
    #[arg(long)]
    fixed: bool,

    /// Currency label printed before amounts
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Print a machine-readable copy of the results after the report
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_settings(self) -> Settings {
        Settings {
            variant: if self.fixed {
                Variant::Fixed
            } else {
                Variant::Configurable
            },
            currency: self.currency,
            export: self.export,
            verbosity: self.verbose,
        }
    }
}

fn main() -> Result<()> {
    let settings = Cli::parse().into_settings();

    // Diagnostics go to stderr so the report on stdout stays intact
    tracing_subscriber::registry()
        .with(EnvFilter::new(settings.log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let run = tracker::run(&settings, &mut prompter)?;
    info!(
        "session complete: {} categories, total {}, {} over budget",
        run.sheet.categories().len(),
        run.summary.total,
        run.alerts.over_budget_count()
    );

    Ok(())
}
