//! Main event generator for producing keyed records.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::generators::flat::{generate_flat_event, FLAT_KEY_LEN};
use crate::generators::random_string;
use crate::generators::structured::generate_structured_event;
use crate::record::{EventDocument, Record, StructuredEvent};

/// Which document shape the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventMode {
    /// Random flat records with random keys.
    Flat,
    /// Structured log events keyed by service, environment, region and user.
    #[default]
    Structured,
}

impl std::fmt::Display for EventMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventMode::Flat => write!(f, "flat"),
            EventMode::Structured => write!(f, "structured"),
        }
    }
}

/// Event generator that produces synthetic records.
///
/// The generator owns its RNG. With a fixed seed, two generators produce the
/// same values in the same order; timestamps still come from the clock.
pub struct EventGenerator {
    mode: EventMode,
    rng: StdRng,
    /// Records produced by `next_record` and the `generate_*` methods
    generated: u64,
}

impl EventGenerator {
    /// Create a new generator. `None` seeds the RNG from the operating system.
    pub fn new(mode: EventMode, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            mode,
            rng,
            generated: 0,
        }
    }

    pub fn mode(&self) -> EventMode {
        self.mode
    }

    /// Number of records generated so far (seed fixtures excluded).
    pub fn generated_count(&self) -> u64 {
        self.generated
    }

    /// Generate the next record in the configured mode.
    pub fn next_record(&mut self) -> Record {
        match self.mode {
            EventMode::Flat => self.generate_flat(),
            EventMode::Structured => self.generate_structured(),
        }
    }

    /// Generate a flat record with a random 12 character key.
    pub fn generate_flat(&mut self) -> Record {
        let key = random_string(&mut self.rng, FLAT_KEY_LEN);
        let event = generate_flat_event(&mut self.rng, Utc::now());
        self.generated += 1;

        Record {
            key: Some(key),
            value: EventDocument::Flat(event),
        }
    }

    /// Generate a structured record keyed with [`crate::build_key`].
    pub fn generate_structured(&mut self) -> Record {
        let event = self.structured_event();
        self.generated += 1;

        Record {
            key: Some(event.key()),
            value: EventDocument::Structured(event),
        }
    }

    /// Draw a bare structured event without counting it as a generated record.
    pub fn structured_event(&mut self) -> StructuredEvent {
        generate_structured_event(&mut self.rng, Utc::now())
    }

    /// Generate `count` records lazily.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut EventGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
