//! Record publisher.
//!
//! `publish` only hands a record to the client's send queue. Delivery is
//! confirmed by `flush`, which waits for every record handed off since the
//! previous flush.
//!
//! When the send queue is full, `publish` waits for space for up to
//! [`ProducerSettings::queue_timeout`] before failing.

use std::time::Duration;

use async_trait::async_trait;
use event_generator::Record;
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::producer::{DeliveryFuture, FutureProducer, FutureRecord};
use rdkafka::ClientConfig;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::encoder::Encoders;
use crate::error::PublisherError;

/// Pause between enqueue attempts while the send queue is full.
const QUEUE_FULL_BACKOFF: Duration = Duration::from_millis(100);

/// Destination for generated records.
#[async_trait]
pub trait RecordSink: Send {
    /// Hand a record off for asynchronous delivery.
    async fn publish(&mut self, record: &Record) -> Result<(), PublisherError>;

    /// Wait until every handed-off record is acknowledged, or fail on the
    /// first delivery error.
    async fn flush(&mut self) -> Result<(), PublisherError>;

    /// Release the client. Calling it again is a no-op.
    fn close(&mut self);
}

/// Producer tuning for a [`KafkaPublisher`].
#[derive(Debug, Clone)]
pub struct ProducerSettings {
    /// Time the client keeps trying to deliver a record (`message.timeout.ms`).
    pub message_timeout: Duration,
    /// Records the send queue holds (`queue.buffering.max.messages`).
    pub queue_capacity: u32,
    /// How long `publish` waits for room in a full send queue.
    pub queue_timeout: Duration,
}

impl Default for ProducerSettings {
    fn default() -> Self {
        Self {
            message_timeout: Duration::from_secs(30),
            queue_capacity: 100_000,
            queue_timeout: Duration::from_secs(30),
        }
    }
}

impl ProducerSettings {
    pub fn with_message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: u32) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    pub fn with_queue_timeout(mut self, timeout: Duration) -> Self {
        self.queue_timeout = timeout;
        self
    }
}

/// Producer settings used for seeding.
pub fn producer_config(brokers: &str, settings: &ProducerSettings) -> ClientConfig {
    let mut config = ClientConfig::new();
    config
        .set("bootstrap.servers", brokers)
        .set(
            "message.timeout.ms",
            settings.message_timeout.as_millis().to_string(),
        )
        .set(
            "queue.buffering.max.messages",
            settings.queue_capacity.to_string(),
        )
        .set("queue.buffering.max.kbytes", "1048576")
        .set(
            "batch.num.messages",
            settings.queue_capacity.min(10_000).to_string(),
        )
        .set("batch.size", "65536")
        .set("linger.ms", "5");
    config
}

/// [`RecordSink`] that publishes to a single Kafka topic.
///
/// Records go to the fixed topic without a partition override; the key
/// decides partitioning.
pub struct KafkaPublisher {
    producer: Option<FutureProducer>,
    topic: String,
    encoders: Encoders,
    queue_timeout: Duration,
    pending: Vec<DeliveryFuture>,
}

impl KafkaPublisher {
    /// Create a publisher for `topic` on the given brokers.
    pub fn new(brokers: &str, topic: &str, encoders: Encoders) -> Result<Self, PublisherError> {
        Self::with_settings(brokers, topic, encoders, ProducerSettings::default())
    }

    /// Create a publisher with explicit producer tuning.
    pub fn with_settings(
        brokers: &str,
        topic: &str,
        encoders: Encoders,
        settings: ProducerSettings,
    ) -> Result<Self, PublisherError> {
        let producer: FutureProducer = producer_config(brokers, &settings).create()?;

        info!("Created Kafka publisher for topic '{}'", topic);

        Ok(Self {
            producer: Some(producer),
            topic: topic.to_string(),
            encoders,
            queue_timeout: settings.queue_timeout,
            pending: Vec::new(),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Records handed off but not yet flushed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_closed(&self) -> bool {
        self.producer.is_none()
    }
}

#[async_trait]
impl RecordSink for KafkaPublisher {
    async fn publish(&mut self, record: &Record) -> Result<(), PublisherError> {
        let producer = self.producer.as_ref().ok_or(PublisherError::Closed)?;
        let encoded = self.encoders.encode(record)?;
        let deadline = Instant::now() + self.queue_timeout;
        let mut waited = false;

        let delivery = loop {
            let mut future_record: FutureRecord<'_, [u8], [u8]> =
                FutureRecord::to(&self.topic).payload(encoded.payload.as_slice());
            if let Some(key) = encoded.key.as_deref() {
                future_record = future_record.key(key);
            }

            match producer.send_result(future_record) {
                Ok(delivery) => break delivery,
                Err((KafkaError::MessageProduction(RDKafkaErrorCode::QueueFull), _))
                    if Instant::now() < deadline => {}
                Err((err, _)) => return Err(PublisherError::Kafka(err)),
            }

            if !waited {
                debug!("Send queue full, waiting for space");
                waited = true;
            }
            sleep(QUEUE_FULL_BACKOFF).await;
        };
        self.pending.push(delivery);

        Ok(())
    }

    async fn flush(&mut self) -> Result<(), PublisherError> {
        let pending = std::mem::take(&mut self.pending);
        let total = pending.len();

        for delivery in pending {
            match delivery.await {
                Ok(Ok(_)) => {}
                Ok(Err((err, _))) => return Err(PublisherError::Delivery(err)),
                Err(_) => return Err(PublisherError::DeliveryCanceled),
            }
        }

        debug!("Flushed {} records to topic '{}'", total, self.topic);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(producer) = self.producer.take() {
            if !self.pending.is_empty() {
                warn!(
                    "Closing publisher with {} unflushed records",
                    self.pending.len()
                );
                self.pending.clear();
            }
            drop(producer);
            info!("Kafka publisher for topic '{}' closed", self.topic);
        }
    }
}
