//! Persisted scoreboard
//!
//! The ledger of won rounds and the key-value stores it is saved to.

mod ledger;
pub mod store;

pub use ledger::{Ledger, LedgerSummary, SCORES_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
