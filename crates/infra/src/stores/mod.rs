//! In-memory host data: rules, items, and settings.

pub mod item_catalog;
pub mod rule_store;
pub mod settings;

pub use item_catalog::{InMemoryItemCatalog, ItemRecord};
pub use rule_store::{InMemoryRuleStore, RuleStore};
pub use settings::InMemorySettings;
