//! Publish driver.
//!
//! Runs the publish phase: the seed records first (structured mode only),
//! then the generated records, then a blocking flush and close.

use event_generator::{seed_records, EventGenerator, EventMode};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::error::PublisherError;
use crate::publisher::RecordSink;

/// Default interval, in generated records, between progress log lines.
pub const DEFAULT_PROGRESS_EVERY: u64 = 1000;

/// Metrics from a publish run.
#[derive(Debug, Clone, Default)]
pub struct PublishMetrics {
    /// Seed records published ahead of the generated stream.
    pub seed_records: u64,
    /// Generated records published.
    pub generated_records: u64,
    /// Total time taken, flush included.
    pub total_duration: Duration,
    /// Time spent waiting in flush.
    pub flush_duration: Duration,
}

impl PublishMetrics {
    pub fn total_records(&self) -> u64 {
        self.seed_records + self.generated_records
    }

    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.total_records() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drives a generator into a [`RecordSink`].
pub struct Populator {
    generator: EventGenerator,
    progress_every: u64,
}

impl Populator {
    pub fn new(generator: EventGenerator) -> Self {
        Self {
            generator,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }

    /// Log progress every `progress_every` generated records. Zero disables it.
    pub fn with_progress_every(mut self, progress_every: u64) -> Self {
        self.progress_every = progress_every;
        self
    }

    pub fn generator(&self) -> &EventGenerator {
        &self.generator
    }

    /// Publish the seed records and `count` generated records, then flush
    /// and close the sink.
    ///
    /// Any publish or flush error aborts the run and is returned as is.
    pub async fn run<S: RecordSink + ?Sized>(
        &mut self,
        sink: &mut S,
        count: u64,
    ) -> Result<PublishMetrics, PublisherError> {
        let start_time = Instant::now();
        let mut metrics = PublishMetrics::default();

        if self.generator.mode() == EventMode::Structured {
            for (i, seed) in seed_records(&mut self.generator).iter().enumerate() {
                sink.publish(seed).await?;
                metrics.seed_records += 1;
                info!(
                    "Published seed record {}: key={}",
                    i + 1,
                    seed.key.as_deref().unwrap_or("<none>")
                );
            }
        }

        info!(
            "Publishing {} {} records...",
            count,
            self.generator.mode()
        );

        for record in self.generator.records(count) {
            sink.publish(&record).await?;
            metrics.generated_records += 1;

            if self.progress_every > 0 && metrics.generated_records % self.progress_every == 0 {
                info!("Produced {} messages...", metrics.generated_records);
            }
        }

        let flush_start = Instant::now();
        sink.flush().await?;
        metrics.flush_duration = flush_start.elapsed();
        debug!("Flush completed in {:?}", metrics.flush_duration);

        sink.close();

        metrics.total_duration = start_time.elapsed();
        info!(
            "Successfully produced {} messages ({} seed) in {:?} ({:.2} msg/sec)",
            metrics.total_records(),
            metrics.seed_records,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}
