//! In-crate fakes for host lookups and settings.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use stockgate_core::{CompanyId, ItemCode, ItemGroupId, RuleId, WarehouseId};

use crate::lookup::{RuleCandidate, RuleLookup, SettingsStore};
use crate::settings::CustomField;

struct FakeRule {
    name: RuleId,
    warehouse: WarehouseId,
    company: CompanyId,
    groups: Vec<ItemGroupId>,
    modified: DateTime<Utc>,
}

#[derive(Default)]
pub(crate) struct FakeLookup {
    rules: Vec<FakeRule>,
    items: HashMap<ItemCode, ItemGroupId>,
    active_rule_queries: Cell<usize>,
    allowed_group_queries: Cell<usize>,
    item_queries: Cell<usize>,
}

impl FakeLookup {
    pub(crate) fn with_rule(self, name: &str, warehouse: &str, company: &str, groups: &[&str]) -> Self {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        self.with_rule_at(name, warehouse, company, groups, at)
    }

    pub(crate) fn with_rule_at(
        mut self,
        name: &str,
        warehouse: &str,
        company: &str,
        groups: &[&str],
        modified: DateTime<Utc>,
    ) -> Self {
        self.rules.push(FakeRule {
            name: name.into(),
            warehouse: warehouse.into(),
            company: company.into(),
            groups: groups.iter().map(|g| ItemGroupId::from(*g)).collect(),
            modified,
        });
        self
    }

    pub(crate) fn with_item(mut self, item: &str, group: &str) -> Self {
        self.items.insert(item.into(), group.into());
        self
    }

    pub(crate) fn active_rule_queries(&self) -> usize {
        self.active_rule_queries.get()
    }

    pub(crate) fn allowed_group_queries(&self) -> usize {
        self.allowed_group_queries.get()
    }

    pub(crate) fn item_queries(&self) -> usize {
        self.item_queries.get()
    }
}

impl RuleLookup for FakeLookup {
    fn active_rules(&self, warehouse: &WarehouseId, company: &CompanyId) -> Vec<RuleCandidate> {
        self.active_rule_queries.set(self.active_rule_queries.get() + 1);
        self.rules
            .iter()
            .filter(|r| &r.warehouse == warehouse && &r.company == company)
            .map(|r| RuleCandidate {
                name: r.name.clone(),
                modified: r.modified,
            })
            .collect()
    }

    fn allowed_item_groups(&self, rule: &RuleId) -> Vec<ItemGroupId> {
        self.allowed_group_queries.set(self.allowed_group_queries.get() + 1);
        self.rules
            .iter()
            .filter(|r| &r.name == rule)
            .flat_map(|r| r.groups.iter().cloned())
            .collect()
    }

    fn item_group(&self, item: &ItemCode) -> Option<ItemGroupId> {
        self.item_queries.set(self.item_queries.get() + 1);
        self.items.get(item).cloned()
    }
}

#[derive(Default)]
pub(crate) struct FakeSettings {
    flags: RefCell<HashMap<(String, String), Option<bool>>>,
}

impl FakeSettings {
    pub(crate) fn enabled() -> Self {
        let settings = Self::default();
        settings.set(true);
        settings
    }

    pub(crate) fn disabled() -> Self {
        let settings = Self::default();
        settings.set(false);
        settings
    }

    fn set(&self, value: bool) {
        self.flags.borrow_mut().insert(
            (
                crate::settings::SETTINGS_DOCTYPE.to_owned(),
                crate::settings::ENABLE_RULES_FIELD.to_owned(),
            ),
            Some(value),
        );
    }
}

impl SettingsStore for FakeSettings {
    fn get_flag(&self, doctype: &str, fieldname: &str) -> Option<bool> {
        self.flags
            .borrow()
            .get(&(doctype.to_owned(), fieldname.to_owned()))
            .copied()
            .flatten()
    }

    fn provision_field(&self, field: &CustomField) {
        self.flags
            .borrow_mut()
            .entry((field.doctype.clone(), field.fieldname.clone()))
            .or_insert(field.default);
    }

    fn remove_field(&self, doctype: &str, fieldname: &str) {
        self.flags
            .borrow_mut()
            .remove(&(doctype.to_owned(), fieldname.to_owned()));
    }
}
