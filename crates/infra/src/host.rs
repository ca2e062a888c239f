//! In-process host: stores, settings and the lifecycle hooks wired together.

use std::sync::Arc;

use stockgate_core::{CompanyId, ItemCode, ItemGroupId, RuleId, WarehouseId};
use stockgate_rules::{
    RuleCandidate, RuleLookup, TransactionDocument, ValidationError, after_install, before_uninstall,
};

use crate::config::HostConfig;
use crate::seed::SeedData;
use crate::stores::{InMemoryItemCatalog, InMemoryRuleStore, InMemorySettings};

/// Everything the validator needs from the platform, held in memory.
///
/// Cheap to clone; clones share the same stores.
#[derive(Debug, Clone, Default)]
pub struct StockRulesHost {
    rules: Arc<InMemoryRuleStore>,
    items: Arc<InMemoryItemCatalog>,
    settings: Arc<InMemorySettings>,
}

impl StockRulesHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize logging, provision settings and load the seed file, if any.
    pub fn bootstrap(config: &HostConfig) -> anyhow::Result<Self> {
        stockgate_observability::init_with_default(&config.log_filter);

        let host = Self::new();
        host.after_install(config.rules_enabled_by_default);

        if let Some(path) = &config.seed_path {
            SeedData::load(path)?.apply(&*host.rules, &host.items, &host.settings)?;
        }

        Ok(host)
    }

    pub fn rules(&self) -> &InMemoryRuleStore {
        &self.rules
    }

    pub fn items(&self) -> &InMemoryItemCatalog {
        &self.items
    }

    pub fn settings(&self) -> &InMemorySettings {
        &self.settings
    }

    pub fn load_seed(&self, seed: SeedData) -> anyhow::Result<()> {
        seed.apply(&*self.rules, &self.items, &self.settings)
    }

    pub fn before_save(&self, doc: &TransactionDocument) -> Result<(), ValidationError> {
        stockgate_rules::before_save(self, &*self.settings, doc)
    }

    pub fn before_submit(&self, doc: &TransactionDocument) -> Result<(), ValidationError> {
        stockgate_rules::before_submit(self, &*self.settings, doc)
    }

    pub fn after_install(&self, enabled_by_default: bool) {
        after_install(&*self.settings, enabled_by_default);
    }

    pub fn before_uninstall(&self) {
        before_uninstall(&*self.settings);
    }
}

impl RuleLookup for StockRulesHost {
    fn active_rules(&self, warehouse: &WarehouseId, company: &CompanyId) -> Vec<RuleCandidate> {
        self.rules.active_rules(warehouse, company)
    }

    fn allowed_item_groups(&self, rule: &RuleId) -> Vec<ItemGroupId> {
        self.rules.allowed_item_groups(rule)
    }

    fn item_group(&self, item: &ItemCode) -> Option<ItemGroupId> {
        self.items.item_group(item)
    }
}
