//! Injected id generation.
//!
//! The engine never owns identity. Every operation that creates holes or
//! constraints takes an `IdGenerator` from the caller, so tests can supply
//! deterministic ids and the editor can plug in its own scheme.

use uuid::Uuid;

/// Source of unique ids for newly created entities.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Deterministic `prefix-N` ids, counting up from a starting value.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 0)
    }

    pub fn starting_at(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: start,
        }
    }

    /// Number the next call to `next_id` will use.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random v4 UUIDs, for editors that want globally unique ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}
