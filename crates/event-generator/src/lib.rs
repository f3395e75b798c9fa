//! Synthetic event generator for kafka-seeder.
//!
//! This crate provides the `EventGenerator` which produces keyed JSON-ready
//! records for publishing to a Kafka topic. Two document shapes are supported:
//!
//! - **flat**: a random record with an id, a name, a value and a nested
//!   `data` object, keyed by a random string
//! - **structured**: a semi-structured HTTP "log event" with `meta`,
//!   `request`, `response`, `user` and `event` sections, keyed by
//!   [`build_key`]
//!
//! The generator owns a seedable RNG, so the same seed yields the same
//! sequence of values (timestamps excepted, they are taken from the clock).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │    EventGenerator    │
//! │                      │
//! │  - mode              │──── seed_records() ──▶ 5 fixed fixtures
//! │  - rng (StdRng)      │
//! │  - generated count   │──── next_record()  ──▶ Record { key, value }
//! └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use event_generator::{seed_records, EventGenerator, EventMode};
//!
//! let mut generator = EventGenerator::new(EventMode::Structured, Some(42));
//!
//! let seeds = seed_records(&mut generator);
//! assert_eq!(seeds.len(), 5);
//!
//! let record = generator.next_record();
//! assert!(record.key.is_some());
//! ```

pub mod generator;
pub mod generators;
pub mod record;
pub mod seeds;

// Re-exports for convenience
pub use generator::{EventGenerator, EventMode, RecordIterator};
pub use generators::structured::{is_success, status_message};
pub use record::{
    build_key, Event, EventDocument, FlatData, FlatEvent, Meta, Record, Request, RequestHeaders,
    Response, StructuredEvent, User,
};
pub use seeds::{seed_records, SEED_RECORD_COUNT};
