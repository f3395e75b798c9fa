//! Broker readiness probe.
//!
//! Before publishing, the seeder opens a throwaway client connection to the
//! broker and retries with a fixed interval until the broker answers or the
//! attempt budget runs out.

use async_trait::async_trait;
use rdkafka::error::KafkaError;
use rdkafka::producer::{BaseProducer, Producer};
use rdkafka::ClientConfig;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::PublisherError;

/// Default number of connection attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// Default pause between failed connection attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Outcome of a single failed connection attempt.
#[derive(Error, Debug)]
pub enum ConnectError {
    /// No broker in the address list answered. Retried by the probe.
    #[error("no reachable broker: {0}")]
    Unreachable(String),

    /// The client could not be set up at all. Not retried.
    #[error("client error: {0}")]
    Client(String),
}

/// Opens and immediately closes a connection to the broker cluster.
#[async_trait]
pub trait BrokerConnector: Send + Sync {
    async fn connect(&self) -> Result<(), ConnectError>;
}

/// Connector backed by an rdkafka client.
///
/// A connection counts as established once cluster metadata can be fetched.
pub struct KafkaConnector {
    brokers: String,
    metadata_timeout: Duration,
}

impl KafkaConnector {
    pub fn new(brokers: &str, metadata_timeout: Duration) -> Self {
        Self {
            brokers: brokers.to_string(),
            metadata_timeout,
        }
    }

    pub fn brokers(&self) -> &str {
        &self.brokers
    }
}

#[async_trait]
impl BrokerConnector for KafkaConnector {
    async fn connect(&self) -> Result<(), ConnectError> {
        let brokers = self.brokers.clone();
        let timeout = self.metadata_timeout;

        // fetch_metadata blocks the calling thread
        tokio::task::spawn_blocking(move || -> Result<(), ConnectError> {
            let producer: BaseProducer = ClientConfig::new()
                .set("bootstrap.servers", &brokers)
                .create()
                .map_err(|e| ConnectError::Client(e.to_string()))?;

            match producer.client().fetch_metadata(None, timeout) {
                Ok(_) => Ok(()),
                Err(err @ KafkaError::ClientCreation(_)) => {
                    Err(ConnectError::Client(err.to_string()))
                }
                Err(err) => Err(ConnectError::Unreachable(err.to_string())),
            }
        })
        .await
        .map_err(|e| ConnectError::Client(format!("probe task failed: {e}")))?
    }
}

/// Wait until the broker accepts a connection.
///
/// Makes at most `max_attempts` attempts, sleeping `interval` after every
/// unreachable attempt except the last one. Returns `Ok(true)` as soon as an
/// attempt succeeds and `Ok(false)` once the attempts are exhausted. Client
/// setup errors are returned immediately without retrying.
pub async fn wait_for_broker<C: BrokerConnector + ?Sized>(
    connector: &C,
    max_attempts: u32,
    interval: Duration,
) -> Result<bool, PublisherError> {
    for attempt in 1..=max_attempts {
        match connector.connect().await {
            Ok(()) => {
                info!("Kafka is ready (attempt {attempt}/{max_attempts})");
                return Ok(true);
            }
            Err(ConnectError::Unreachable(reason)) => {
                warn!("Waiting for Kafka... (attempt {attempt}/{max_attempts}): {reason}");
                if attempt < max_attempts {
                    tokio::time::sleep(interval).await;
                }
            }
            Err(ConnectError::Client(reason)) => {
                return Err(PublisherError::Client(reason));
            }
        }
    }

    Ok(false)
}
