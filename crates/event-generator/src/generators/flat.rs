//! Flat random record generator.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::random_string;
use crate::record::{FlatData, FlatEvent};

/// Length of the random key attached to flat records.
pub const FLAT_KEY_LEN: usize = 12;

const ID_LEN: usize = 8;
const NAME_LEN: usize = 15;
const FIELD1_LEN: usize = 20;

/// Generate a flat event stamped with `now`.
pub fn generate_flat_event<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> FlatEvent {
    FlatEvent {
        id: random_string(rng, ID_LEN),
        name: random_string(rng, NAME_LEN),
        value: rng.random_range(1..=1000),
        timestamp: now.timestamp_micros() as f64 / 1_000_000.0,
        data: FlatData {
            field1: random_string(rng, FIELD1_LEN),
            field2: rng.random_range(0.0..100.0),
            field3: rng.random_bool(0.5),
        },
    }
}
