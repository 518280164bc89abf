//! Berth inventory and priority classification.
//!
//! - [`Inventory`]: the fixed pool of berths, partitioned by type. Answers
//!   availability queries and hands out/reclaims individual berths; never
//!   decides *who* gets one.
//! - [`CapacityConfig`]: the pool sizes, overridable at startup.
//! - [`classify_group`]: the pure priority-classification function of §4.2.

pub mod classifier;
pub mod config;
pub mod inventory;

pub use classifier::classify_group;
pub use config::CapacityConfig;
pub use inventory::Inventory;
