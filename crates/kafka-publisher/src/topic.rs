//! Topic provisioning.

use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::ClientConfig;
use std::time::Duration;
use tracing::info;

use crate::error::PublisherError;

/// Create a Kafka topic if it doesn't exist.
///
/// An "already exists" answer from the broker counts as success.
pub async fn create_topic_if_not_exists(
    brokers: &str,
    topic: &str,
    partitions: i32,
) -> Result<(), PublisherError> {
    let admin_client: AdminClient<DefaultClientContext> = ClientConfig::new()
        .set("bootstrap.servers", brokers)
        .create()?;

    let new_topic = NewTopic::new(topic, partitions, TopicReplication::Fixed(1));
    let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(10)));

    let results = admin_client
        .create_topics(&[new_topic], &opts)
        .await
        .map_err(|e| PublisherError::TopicCreation(format!("Failed to create topic: {e}")))?;

    for result in results {
        match result {
            Ok(topic_name) => {
                info!("Topic '{}' created with {} partitions", topic_name, partitions);
            }
            Err((topic_name, err)) => {
                if is_already_exists(&err.to_string()) {
                    info!("Topic '{}' already exists", topic_name);
                } else {
                    return Err(PublisherError::TopicCreation(format!(
                        "Failed to create topic {topic_name}: {err}"
                    )));
                }
            }
        }
    }

    Ok(())
}

fn is_already_exists(message: &str) -> bool {
    message.contains("already exists") || message.contains("TopicExistsException")
}
