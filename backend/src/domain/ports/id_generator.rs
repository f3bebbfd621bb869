//! Identifier generation for new records.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh, globally unique identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_uuid(&self) -> Uuid;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Predictable identifiers `…0001`, `…0002`, … for tests and fixtures.
///
/// # Examples
/// ```
/// use backend::domain::ports::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::default();
/// assert_eq!(ids.next_uuid().to_string(), "00000000-0000-0000-0000-000000000001");
/// assert_eq!(ids.next_uuid().as_u128(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    issued: AtomicU64,
}

impl SequentialIdGenerator {
    /// Continue after `issued` identifiers have already been handed out.
    pub const fn starting_after(issued: u64) -> Self {
        Self {
            issued: AtomicU64::new(issued),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_uuid(&self) -> Uuid {
        let next = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(u128::from(next))
    }
}
