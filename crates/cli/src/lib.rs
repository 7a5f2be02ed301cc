pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use vitals_core::MissingDataStrategy;

#[derive(Debug, Parser)]
#[command(
    name = "vitals",
    about = "Customer health scoring CLI",
    long_about = "Score customer health records with the vitals engine: overall score, \
                  risk tier, confidence, and recommendations.",
    after_help = "Examples:\n  vitals score customer.json\n  vitals batch customers.json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Score a single customer health record (JSON file) and print the breakdown")]
    Score {
        #[arg(help = "Path to a JSON file shaped like CustomerHealthInput")]
        input: PathBuf,
        #[arg(long, help = "Skip confidence estimation (confidence is reported as 100)")]
        no_confidence: bool,
        #[arg(long, value_name = "DAYS", help = "Override the new-customer tenure threshold")]
        new_customer_threshold: Option<u32>,
        #[arg(long, value_enum, help = "Policy for absent optional precomputed scores")]
        missing_data: Option<MissingDataPolicy>,
    },
    #[command(
        about = "Score an array of customer records independently, one JSON result per line"
    )]
    Batch {
        #[arg(help = "Path to a JSON file holding an array of customer records")]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MissingDataPolicy {
    Neutral,
    Conservative,
    Optimistic,
}

impl From<MissingDataPolicy> for MissingDataStrategy {
    fn from(policy: MissingDataPolicy) -> Self {
        match policy {
            MissingDataPolicy::Neutral => MissingDataStrategy::Neutral,
            MissingDataPolicy::Conservative => MissingDataStrategy::Conservative,
            MissingDataPolicy::Optimistic => MissingDataStrategy::Optimistic,
        }
    }
}

pub fn run() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Score { input, no_confidence, new_customer_threshold, missing_data } => {
            let mut options = vitals_core::ScoreOptions::new()
                .with_include_confidence(!no_confidence);
            if let Some(days) = new_customer_threshold {
                options = options.with_new_customer_threshold(days);
            }
            if let Some(policy) = missing_data {
                options = options.with_missing_data(policy.into());
            }
            commands::score::run(&input, options)
        }
        Command::Batch { input } => commands::batch::run(&input),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
