//! Read access to host data.
//!
//! The hosting ERP owns rules, items and settings; the validator only reads them
//! through these traits. `stockgate-infra` provides in-memory implementations.

use chrono::{DateTime, Utc};

use stockgate_core::{CompanyId, ItemCode, ItemGroupId, RuleId, WarehouseId};

use crate::settings::CustomField;

/// An active rule matching a scope, with the timestamp used to order duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCandidate {
    pub name: RuleId,
    pub modified: DateTime<Utc>,
}

/// Relational point lookups against host records.
pub trait RuleLookup {
    /// Every active rule stored for (warehouse, company). Normally zero or one.
    fn active_rules(&self, warehouse: &WarehouseId, company: &CompanyId) -> Vec<RuleCandidate>;

    /// Item groups listed on a rule's allowed-groups table.
    fn allowed_item_groups(&self, rule: &RuleId) -> Vec<ItemGroupId>;

    /// Item group of an item, if the item exists and has one.
    fn item_group(&self, item: &ItemCode) -> Option<ItemGroupId>;
}

/// Singleton settings store (custom check fields on a settings document).
pub trait SettingsStore {
    /// Current value of a check field; `None` when the field is not provisioned.
    fn get_flag(&self, doctype: &str, fieldname: &str) -> Option<bool>;

    /// Create a custom field if missing. Existing fields keep their value.
    fn provision_field(&self, field: &CustomField);

    /// Drop a custom field and its stored value. Missing fields are ignored.
    fn remove_field(&self, doctype: &str, fieldname: &str);
}
