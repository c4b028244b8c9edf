mod generate;

use chrono::{DateTime, Utc};
use clap::Parser;
use qa_datagen::{Format, RunConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qa-datagen")]
#[command(version)]
#[command(
    about = "Generate synthetic users, products and orders with referential integrity",
    long_about = None
)]
pub struct Cli {
    /// Number of users [default: 100]
    #[arg(long)]
    pub users: Option<usize>,

    /// Number of products [default: 50]
    #[arg(long)]
    pub products: Option<usize>,

    /// Number of orders [default: 200]
    #[arg(long)]
    pub orders: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file [default: test-data.json]
    /// For sql, a trailing .json is replaced with .sql
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: json, sql [default: json]
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Mask user PII (email, phone, name) before export
    #[arg(long, conflicts_with = "anonymize")]
    pub mask: bool,

    /// Replace user PII with salted SHA256 tokens before export
    #[arg(long, conflicts_with = "mask")]
    pub anonymize: bool,

    /// Salt for --anonymize [default: qa-test]
    #[arg(long)]
    pub salt: Option<String>,

    /// Fixed "now" for generated timestamps (RFC 3339).
    /// Defaults to 2024-01-01T00:00:00Z when --seed is given, else the current time
    #[arg(long)]
    pub reference_time: Option<DateTime<Utc>>,

    /// YAML config file; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show progress while writing the export
    #[arg(short, long)]
    pub progress: bool,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let options = generate::Options::resolve(cli, config);
    generate::run(options)
}
