//! Command-line interface for kafka-seeder
//!
//! # Usage Examples
//!
//! ```bash
//! # Defaults: broker kafka:29092, topic random-data, 10000 structured records
//! kafka-seeder
//!
//! # Flat records with a fixed seed
//! kafka-seeder --mode flat --seed 42
//!
//! # Shorter startup wait
//! kafka-seeder --max-attempts 5 --retry-interval 1s
//! ```
//!
//! Exits with status 1 when the broker never becomes reachable or when
//! publishing fails.

use clap::Parser;
use kafka_publisher::KafkaSeedArgs;
use kafka_seeder::{run_seed, SeedOutcome};

#[derive(Parser)]
#[command(name = "kafka-seeder")]
#[command(about = "Publish synthetic JSON log events to a Kafka topic")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: KafkaSeedArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run_seed(&cli.args).await {
        Ok(SeedOutcome::Published(metrics)) => {
            println!(
                "Successfully produced {} messages to '{}'",
                metrics.total_records(),
                cli.args.topic
            );
        }
        Ok(SeedOutcome::BrokerUnavailable { attempts }) => {
            eprintln!("Failed to connect to Kafka after {attempts} attempts");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}
