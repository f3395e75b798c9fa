//! Kafka E2E test
//!
//! Publishes a small run against a real broker. The publish test needs the
//! docker-compose Kafka service, so it only runs with `--ignored`.

use event_generator::{EventGenerator, EventMode};
use kafka_publisher::{
    create_topic_if_not_exists, wait_for_broker, Encoders, KafkaConnector, KafkaPublisher,
    Populator,
};
use std::time::Duration;

/// Kafka broker address for testing
const KAFKA_BROKER: &str = "kafka:9092";

#[tokio::test]
#[ignore = "requires a running Kafka broker"]
async fn test_publish_to_kafka() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("kafka_publisher=debug")
        .try_init()
        .ok();

    let connector = KafkaConnector::new(KAFKA_BROKER, Duration::from_secs(5));
    assert!(wait_for_broker(&connector, 10, Duration::from_secs(2)).await?);

    let topic = format!(
        "kafka-seeder-test-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_millis()
    );
    create_topic_if_not_exists(KAFKA_BROKER, &topic, 1).await?;
    // Creating twice is fine
    create_topic_if_not_exists(KAFKA_BROKER, &topic, 1).await?;

    let mut publisher = KafkaPublisher::new(KAFKA_BROKER, &topic, Encoders::json())?;
    let mut populator = Populator::new(EventGenerator::new(EventMode::Structured, Some(42)));

    let metrics = populator.run(&mut publisher, 3).await?;

    assert_eq!(metrics.total_records(), 8);
    assert!(publisher.is_closed());
    Ok(())
}

// Nothing listens on port 1, so every metadata fetch fails.
#[tokio::test]
async fn test_unreachable_broker_exhausts_attempts() -> Result<(), Box<dyn std::error::Error>> {
    let connector = KafkaConnector::new("127.0.0.1:1", Duration::from_millis(500));

    let ready = wait_for_broker(&connector, 2, Duration::from_millis(100)).await?;

    assert!(!ready);
    Ok(())
}
