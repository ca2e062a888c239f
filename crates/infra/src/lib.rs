//! Infrastructure layer: in-memory host stores, configuration, seed loading.

pub mod config;
pub mod host;
pub mod seed;
pub mod stores;


pub use config::HostConfig;
pub use host::StockRulesHost;
pub use seed::{SeedData, SeedSettings};
pub use stores::{InMemoryItemCatalog, InMemoryRuleStore, InMemorySettings, ItemRecord, RuleStore};
