//! Conversation records and party search.
//!
//! Provides:
//! - The vCon data model (`Vcon`, `Party`, `DialogEntry`)
//! - A read-only record source (`VconSource`, `MemoryStore`)
//! - The party search predicate (`PartyFilter`, `search`)

pub mod filter;
pub mod store;
pub mod types;

pub use filter::{PartyFilter, search};
pub use store::{MemoryStore, VconSource};
pub use types::{DialogEntry, Party, Vcon};
