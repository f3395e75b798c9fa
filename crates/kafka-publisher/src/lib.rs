//! Kafka publishing for kafka-seeder.
//!
//! This crate waits for a Kafka broker to become reachable and then publishes
//! synthetic records produced by [`event_generator::EventGenerator`] to a
//! single topic.
//!
//! # Architecture
//!
//! ```text
//!   wait_for_broker(connector)          retries Unreachable with a fixed interval
//!          │ ready
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Populator    │────▶│   RecordSink    │  publish() hands off, flush() waits
//! │                 │     │ (KafkaPublisher)│
//! │ - seed records  │     │                 │
//! │ - N generated   │     │ - Encoders      │  key: text → bytes, value: JSON
//! └─────────────────┘     └────────┬────────┘
//!                                  ▼
//!                             Kafka Topic
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use event_generator::{EventGenerator, EventMode};
//! use kafka_publisher::{wait_for_broker, Encoders, KafkaConnector, KafkaPublisher, Populator};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kafka_publisher::PublisherError> {
//!     let connector = KafkaConnector::new("localhost:9092", Duration::from_secs(5));
//!     if !wait_for_broker(&connector, 30, Duration::from_secs(2)).await? {
//!         return Ok(());
//!     }
//!
//!     let mut publisher = KafkaPublisher::new("localhost:9092", "random-data", Encoders::json())?;
//!     let mut populator = Populator::new(EventGenerator::new(EventMode::Structured, Some(42)));
//!     let metrics = populator.run(&mut publisher, 10_000).await?;
//!     println!("Published {} records", metrics.total_records());
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod encoder;
pub mod error;
pub mod populator;
pub mod probe;
pub mod publisher;
pub mod topic;

// Re-exports for convenience
pub use args::{EventModeArg, KafkaSeedArgs, ProbeArgs, TopicArgs};
pub use encoder::{EncodedRecord, Encoders};
pub use error::PublisherError;
pub use populator::{Populator, PublishMetrics, DEFAULT_PROGRESS_EVERY};
pub use probe::{
    wait_for_broker, BrokerConnector, ConnectError, KafkaConnector, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_RETRY_INTERVAL,
};
pub use publisher::{KafkaPublisher, ProducerSettings, RecordSink};
pub use topic::create_topic_if_not_exists;
