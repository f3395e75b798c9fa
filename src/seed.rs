//! One seeding run: probe the broker, then publish.

use anyhow::Context;
use event_generator::EventGenerator;
use kafka_publisher::{
    create_topic_if_not_exists, wait_for_broker, Encoders, KafkaConnector, KafkaPublisher,
    KafkaSeedArgs, Populator, PublishMetrics,
};
use tracing::{error, info};

use crate::config::parse_duration;

/// How a seeding run ended.
#[derive(Debug)]
pub enum SeedOutcome {
    /// The broker never became reachable; nothing was published.
    BrokerUnavailable { attempts: u32 },
    /// All records were published and flushed.
    Published(PublishMetrics),
}

/// Wait for the broker and publish the configured records.
///
/// Probe exhaustion is reported as [`SeedOutcome::BrokerUnavailable`], not as
/// an error. Configuration, publish and flush failures are errors.
pub async fn run_seed(args: &KafkaSeedArgs) -> anyhow::Result<SeedOutcome> {
    let retry_interval = parse_duration(&args.probe.retry_interval)
        .context("Invalid --retry-interval")?;
    let metadata_timeout = parse_duration(&args.probe.metadata_timeout)
        .context("Invalid --metadata-timeout")?;

    info!("Waiting for Kafka at {} to be available...", args.kafka_brokers);
    let connector = KafkaConnector::new(&args.kafka_brokers, metadata_timeout);
    let ready = wait_for_broker(&connector, args.probe.max_attempts, retry_interval)
        .await
        .context("Failed to probe Kafka")?;

    if !ready {
        error!(
            "Failed to connect to Kafka after {} attempts",
            args.probe.max_attempts
        );
        return Ok(SeedOutcome::BrokerUnavailable {
            attempts: args.probe.max_attempts,
        });
    }

    if args.topic_opts.create_topic {
        create_topic_if_not_exists(
            &args.kafka_brokers,
            &args.topic,
            args.topic_opts.partitions,
        )
        .await
        .with_context(|| format!("Failed to create topic '{}'", args.topic))?;
    }

    info!("Creating Kafka producer...");
    let mut publisher = KafkaPublisher::new(&args.kafka_brokers, &args.topic, Encoders::json())
        .context("Failed to create Kafka producer")?;

    let generator = EventGenerator::new(args.mode.into(), args.seed);
    let mut populator = Populator::new(generator).with_progress_every(args.progress_every);

    info!(
        "Starting to produce {} messages to topic '{}'...",
        args.message_count, args.topic
    );
    let metrics = populator
        .run(&mut publisher, args.message_count)
        .await
        .with_context(|| format!("Failed to publish to topic '{}'", args.topic))?;

    info!("Producer finished and closed.");
    Ok(SeedOutcome::Published(metrics))
}
