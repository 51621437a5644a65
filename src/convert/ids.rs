//! Identifier generation for the destination object graph
//!
//! Every checklist, item and binder gets a fresh v4-style UUID. Generation
//! goes through a trait so the pipeline stays deterministic under test: the
//! production generator draws random UUIDs, the sequential one replays a
//! fixed series.

use uuid::Uuid;

/// Source of fresh identifiers for one conversion call
pub trait IdGenerator {
    /// Produce the next identifier; never repeats within one conversion
    fn next_id(&mut self) -> Uuid;
}

/// Production generator: random version-4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator for tests
///
/// Derives each UUID from an incrementing counter, with version and variant
/// bits set as for a random v4 UUID. Two generators started at the same seed
/// replay the same series.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Start a series at the given seed
    pub fn new(seed: u128) -> Self {
        Self { next: seed }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        let bytes = self.next.to_be_bytes();
        self.next += 1;
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}
