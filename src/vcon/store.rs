//! Read-only conversation storage.

use chrono::{DateTime, TimeZone, Utc};

use super::types::{DialogEntry, Party, Vcon};

/// Source of conversation records for the request handlers.
///
/// Implementations are populated once and never mutated afterwards, so
/// concurrent reads need no synchronization.
pub trait VconSource: Send + Sync {
    /// All records in insertion order.
    fn all(&self) -> &[Vcon];
}

/// In-memory store over a fixed list of records.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Vec<Vcon>,
}

impl MemoryStore {
    /// Create a store holding `records` in the given order.
    #[must_use]
    pub const fn new(records: Vec<Vcon>) -> Self {
        Self { records }
    }

    /// Create a store holding the built-in sample conversation.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_records())
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl VconSource for MemoryStore {
    fn all(&self) -> &[Vcon] {
        &self.records
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .unwrap_or_default()
}

fn seed_records() -> Vec<Vcon> {
    vec![
        Vcon::new(
            "call-001",
            utc(2024, 2, 7, 14, 30, 0),
            "Project Timeline Discussion",
        )
        .with_party(Party::new("Frank Smith", "123-456-7890"))
        .with_party(Party::new("Obi Johnson", "098-765-4321"))
        .with_dialog(DialogEntry::new(
            utc(2024, 2, 7, 14, 30, 0),
            "Frank Smith",
            "Hi Obi, let's discuss the project timeline.",
        ))
        .with_dialog(DialogEntry::new(
            utc(2024, 2, 7, 14, 31, 0),
            "Obi Johnson",
            "Sure Frank, I've reviewed the milestones.",
        )),
    ]
}
