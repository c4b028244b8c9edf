//! CLI handler: generate, optionally mask or anonymize, then export.

use super::Cli;
use anyhow::Context;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use qa_datagen::config::{DEFAULT_ORDERS, DEFAULT_OUTPUT, DEFAULT_PRODUCTS, DEFAULT_USERS};
use qa_datagen::export::{self, Format};
use qa_datagen::generator::{format_timestamp, seeded_reference_time};
use qa_datagen::{Generator, GeneratorSettings, PlanWeights, RunConfig, DEFAULT_SALT};
use std::path::PathBuf;
use std::time::Instant;

/// Privacy transform applied to users before export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Privacy {
    None,
    Mask,
    Anonymize { salt: String },
}

/// Fully resolved run options (flag > config file > default)
#[derive(Debug, Clone)]
pub struct Options {
    pub users: usize,
    pub products: usize,
    pub orders: usize,
    pub seed: Option<u64>,
    pub output: PathBuf,
    pub format: Format,
    pub privacy: Privacy,
    pub reference_time: Option<DateTime<Utc>>,
    pub plan_weights: PlanWeights,
    pub progress: bool,
}

impl Options {
    pub fn resolve(cli: Cli, config: RunConfig) -> Self {
        let privacy = if cli.mask {
            Privacy::Mask
        } else if cli.anonymize {
            Privacy::Anonymize {
                salt: cli
                    .salt
                    .or(config.salt)
                    .unwrap_or_else(|| DEFAULT_SALT.to_string()),
            }
        } else {
            Privacy::None
        };

        Self {
            users: cli.users.or(config.users).unwrap_or(DEFAULT_USERS),
            products: cli.products.or(config.products).unwrap_or(DEFAULT_PRODUCTS),
            orders: cli.orders.or(config.orders).unwrap_or(DEFAULT_ORDERS),
            seed: cli.seed.or(config.seed),
            output: cli
                .output
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            format: cli.format.or(config.format).unwrap_or_default(),
            privacy,
            reference_time: cli.reference_time.or(config.reference_time),
            plan_weights: config.plan_weights.unwrap_or_default(),
            progress: cli.progress,
        }
    }

    /// Seed and reference time for this run. Unseeded runs draw a random seed
    /// and use the current time.
    fn settings(&self) -> GeneratorSettings {
        let (seed, default_time) = match self.seed {
            Some(seed) => (seed, seeded_reference_time()),
            None => (rand::random(), Utc::now()),
        };
        GeneratorSettings::seeded(seed)
            .with_reference_time(self.reference_time.unwrap_or(default_time))
            .with_plan_weights(self.plan_weights)
    }
}

pub fn run(options: Options) -> anyhow::Result<()> {
    let settings = options.settings();
    if options.seed.is_none() {
        eprintln!(
            "Using random seed {} (rerun with --seed {} --reference-time {} to reproduce)",
            settings.seed,
            settings.seed,
            settings.reference_time.to_rfc3339()
        );
    }

    println!("\n🗃️  Test Data Generator");
    println!("{}", "=".repeat(40));

    let start_time = Instant::now();
    let mut gen = Generator::with_settings(settings);

    gen.generate_users(options.users)
        .context("failed to generate users")?;
    println!("✅ Generated {} users", options.users);

    gen.generate_products(options.products)
        .context("failed to generate products")?;
    println!("✅ Generated {} products", options.products);

    gen.generate_orders(options.orders)
        .context("failed to generate orders")?;
    println!("✅ Generated {} orders", options.orders);

    let generated_at = format_timestamp(&gen.reference_time().naive_utc());
    let mut dataset = gen.into_dataset();

    match &options.privacy {
        Privacy::None => {}
        Privacy::Mask => {
            dataset = dataset.masked().context("failed to mask user PII")?;
            println!("🔒 Masked PII for {} users", dataset.users.len());
        }
        Privacy::Anonymize { salt } => {
            dataset = dataset.anonymized(salt);
            println!("🔒 Anonymized PII for {} users", dataset.users.len());
        }
    }

    let target = if options.progress {
        let target = export::output_path(options.format, &options.output);
        let contents = export::render(&dataset, options.format, &generated_at)?;

        let pb = ProgressBar::new(contents.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {msg}",
            )?
            .progress_chars("█▓▒░  ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        let pb_clone = pb.clone();
        let written =
            export::write_export(&target, &contents, move |bytes| pb_clone.set_position(bytes))?;
        pb.finish_with_message(format!("{} bytes", written));
        target
    } else {
        export::export(&dataset, options.format, &options.output, &generated_at)?
    };

    match options.format {
        Format::Json => println!("💾 Exported to {}", target.display()),
        Format::Sql => println!("💾 Exported SQL to {}", target.display()),
    }

    println!("{}", "=".repeat(40));
    println!(
        "✅ Data generation complete in {:.3?}\n",
        start_time.elapsed()
    );

    Ok(())
}
