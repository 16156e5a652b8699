//! Host integration: bridge ports and the in-memory reference host.

pub mod bridge;
pub mod memory;

pub use bridge::{ASSIGNMENTS_FLAG, HostBridge, ROLLED_FLAG, offer_roller};
pub use memory::{FlagStore, MemoryHost};
