//! Startup data for the in-memory host.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use stockgate_rules::{ENABLE_RULES_FIELD, Rule, SETTINGS_DOCTYPE};

use crate::stores::{InMemoryItemCatalog, InMemorySettings, ItemRecord, RuleStore};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedSettings {
    #[serde(default)]
    pub enable_warehouse_item_group_rules: Option<bool>,
}

/// Rules, items and settings to load into a fresh host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub items: Vec<ItemRecord>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub settings: SeedSettings,
}

impl SeedData {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse seed data")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("in seed file {}", path.display()))
    }

    /// Load into the stores. Rules go through the normal write-time checks;
    /// settings must already be provisioned.
    pub fn apply<R: RuleStore + ?Sized>(
        self,
        rules: &R,
        items: &InMemoryItemCatalog,
        settings: &InMemorySettings,
    ) -> anyhow::Result<()> {
        let (item_count, rule_count) = (self.items.len(), self.rules.len());

        for item in self.items {
            items.upsert(item);
        }

        for rule in self.rules {
            let name = rule.name().clone();
            rules
                .save(rule)
                .with_context(|| format!("failed to load rule {name}"))?;
        }

        if let Some(enabled) = self.settings.enable_warehouse_item_group_rules {
            settings
                .set_flag(SETTINGS_DOCTYPE, ENABLE_RULES_FIELD, enabled)
                .context("failed to apply seed settings")?;
        }

        tracing::info!(items = item_count, rules = rule_count, "seed data loaded");
        Ok(())
    }
}
