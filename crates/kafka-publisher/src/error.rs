//! Error types for the Kafka publisher.

use rdkafka::error::KafkaError;
use thiserror::Error;

/// Errors that can occur while probing, provisioning or publishing.
#[derive(Error, Debug)]
pub enum PublisherError {
    #[error("Kafka error: {0}")]
    Kafka(#[from] KafkaError),

    #[error("Failed to encode record value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Delivery failed: {0}")]
    Delivery(KafkaError),

    #[error("Delivery canceled before the broker acknowledged the record")]
    DeliveryCanceled,

    #[error("Publisher is closed")]
    Closed,

    #[error("Topic creation error: {0}")]
    TopicCreation(String),

    #[error("Broker client error: {0}")]
    Client(String),
}
