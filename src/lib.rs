//! kafka-seeder
//!
//! Fills a Kafka topic with synthetic JSON records for local testing of
//! consumers and search tools.
//!
//! A run waits for the broker with a bounded, fixed-interval retry loop and
//! then publishes five seed log events followed by N generated records,
//! finishing with a blocking flush.
//!
//! # CLI Usage
//!
//! ```bash
//! # 10,000 structured log events to the docker-compose broker
//! kafka-seeder
//!
//! # Flat random records, reproducible, against a local broker
//! kafka-seeder --kafka-brokers localhost:9092 --mode flat --seed 42 --message-count 500
//!
//! # Create the topic first
//! kafka-seeder --topic app-logs --create-topic --partitions 6
//! ```

pub mod config;
pub mod seed;

pub use seed::{run_seed, SeedOutcome};
