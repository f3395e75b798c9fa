//! CLI argument definitions for the seeder.
//!
//! Defaults reproduce the fixed settings of a local docker-compose setup.
//! Durations are kept as strings here and parsed by the binary.

use clap::{Args, ValueEnum};
use event_generator::EventMode;

pub const DEFAULT_BROKERS: &str = "kafka:29092";
pub const DEFAULT_TOPIC: &str = "random-data";
pub const DEFAULT_MESSAGE_COUNT: u64 = 10_000;

/// Document shape selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventModeArg {
    Flat,
    Structured,
}

impl From<EventModeArg> for EventMode {
    fn from(mode: EventModeArg) -> Self {
        match mode {
            EventModeArg::Flat => EventMode::Flat,
            EventModeArg::Structured => EventMode::Structured,
        }
    }
}

/// Readiness probe arguments.
#[derive(Args, Clone, Debug)]
pub struct ProbeArgs {
    /// Connection attempts before giving up on the broker
    #[arg(long, default_value = "30")]
    pub max_attempts: u32,

    /// Pause between failed connection attempts (e.g. "2s", "500ms")
    #[arg(long, default_value = "2s")]
    pub retry_interval: String,

    /// How long a single attempt waits for cluster metadata
    #[arg(long, default_value = "5s")]
    pub metadata_timeout: String,
}

/// Topic provisioning arguments.
#[derive(Args, Clone, Debug)]
pub struct TopicArgs {
    /// Create the topic before publishing if it doesn't exist
    #[arg(long)]
    pub create_topic: bool,

    /// Partition count used when creating the topic
    #[arg(long, default_value = "3")]
    pub partitions: i32,
}

/// Arguments for a seeding run.
#[derive(Args, Clone, Debug)]
pub struct KafkaSeedArgs {
    /// Kafka brokers (comma-separated, e.g., "localhost:9092")
    #[arg(long, env = "KAFKA_BROKERS", default_value = DEFAULT_BROKERS)]
    pub kafka_brokers: String,

    /// Topic to publish to
    #[arg(long, env = "KAFKA_TOPIC", default_value = DEFAULT_TOPIC)]
    pub topic: String,

    /// Number of generated records to publish after the seed records
    #[arg(long, default_value_t = DEFAULT_MESSAGE_COUNT)]
    pub message_count: u64,

    /// Document shape of the generated records
    #[arg(long, value_enum, default_value_t = EventModeArg::Structured)]
    pub mode: EventModeArg,

    /// Random seed for reproducible records (default: seeded from the OS)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log progress every N generated records (0 disables)
    #[arg(long, default_value = "1000")]
    pub progress_every: u64,

    #[command(flatten)]
    pub probe: ProbeArgs,

    #[command(flatten)]
    pub topic_opts: TopicArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: KafkaSeedArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["kafka-seeder"]).unwrap();
        let args = cli.args;

        assert_eq!(args.topic, "random-data");
        assert_eq!(args.message_count, 10_000);
        assert_eq!(args.mode, EventModeArg::Structured);
        assert_eq!(args.seed, None);
        assert_eq!(args.progress_every, 1000);
        assert_eq!(args.probe.max_attempts, 30);
        assert_eq!(args.probe.retry_interval, "2s");
        assert!(!args.topic_opts.create_topic);
        assert_eq!(args.topic_opts.partitions, 3);
    }

    #[test]
    fn test_overrides() {
        let cli = TestCli::try_parse_from([
            "kafka-seeder",
            "--kafka-brokers",
            "localhost:9092",
            "--topic",
            "logs",
            "--message-count",
            "3",
            "--mode",
            "flat",
            "--seed",
            "42",
            "--max-attempts",
            "5",
            "--retry-interval",
            "1s",
            "--create-topic",
        ])
        .unwrap();
        let args = cli.args;

        assert_eq!(args.kafka_brokers, "localhost:9092");
        assert_eq!(args.topic, "logs");
        assert_eq!(args.message_count, 3);
        assert_eq!(EventMode::from(args.mode), EventMode::Flat);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.probe.max_attempts, 5);
        assert_eq!(args.probe.retry_interval, "1s");
        assert!(args.topic_opts.create_topic);
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(TestCli::try_parse_from(["kafka-seeder", "--mode", "nested"]).is_err());
    }
}
