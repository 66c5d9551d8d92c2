//! Application services built on top of the ports.

mod post_store;

pub use post_store::{DebugEntry, DebugSnapshot, PostStore, ResetSummary, StoreStatus};
