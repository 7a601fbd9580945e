//! Feedback intake CLI
//!
//! Drives the form and retrieval controllers from the terminal.
//!
//! # Usage
//!
//! ```bash
//! intake submit --variant school --student-name "Asha Nair" --contact-number 9876543210 ...
//! intake submit --variant eng --student-name "Ravi" --contact-number 9000000000 --demo-date 2024-09-14
//! intake retrieve --field student_name --value Asha
//! intake retrieve --field contact_number --value 9876543210 --format json
//! intake fields
//! intake policy --variant eng
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intake_core::Variant;

mod commands;
mod output;
mod sink;

#[derive(Parser)]
#[command(name = "intake")]
#[command(version)]
#[command(about = "Student feedback intake and retrieval", long_about = None)]
struct Cli {
    /// Feedback API base URL (overrides API_BASE_URL)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Output format
    #[arg(long, short, global = true, default_value = "table")]
    format: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in and submit a feedback form
    Submit(commands::submit::SubmitArgs),
    /// Search submitted feedback by field and value
    Retrieve {
        /// Column to match, e.g. student_name
        #[arg(long)]
        field: String,
        /// Value to match
        #[arg(long)]
        value: String,
    },
    /// List searchable fields
    Fields,
    /// Show the validation rules of a form variant
    Policy {
        #[arg(long, default_value = "school")]
        variant: Variant,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Submit(args) => {
            let backend = commands::backend(cli.api_base)?;
            commands::submit::handle(args, backend, cli.format).await
        }
        Commands::Retrieve { field, value } => {
            let backend = commands::backend(cli.api_base)?;
            commands::retrieve::handle(&field, &value, backend, cli.format).await
        }
        Commands::Fields => {
            commands::fields::handle(cli.format);
            Ok(())
        }
        Commands::Policy { variant } => {
            commands::fields::policy(variant, cli.format);
            Ok(())
        }
    }
}
