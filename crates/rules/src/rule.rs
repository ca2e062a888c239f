use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockgate_core::{CompanyId, DomainError, DomainResult, Entity, ItemGroupId, RuleId, WarehouseId};

/// The (warehouse, company) pair a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleScope {
    pub warehouse: WarehouseId,
    pub company: CompanyId,
}

impl RuleScope {
    pub fn new(warehouse: WarehouseId, company: CompanyId) -> Self {
        Self { warehouse, company }
    }
}

impl core::fmt::Display for RuleScope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} / {}", self.warehouse, self.company)
    }
}

/// Child entry of a rule: one item group permitted in the rule's warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedItemGroup {
    pub item_group: ItemGroupId,
}

impl AllowedItemGroup {
    pub fn new(item_group: impl Into<ItemGroupId>) -> Self {
        Self {
            item_group: item_group.into(),
        }
    }
}

/// Warehouse item group rule.
///
/// While active, only the listed item groups may be stocked in `warehouse` for
/// `company`. The rule owns its allowed-group entries; deleting the rule drops them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Records created without a name get a generated one.
    #[serde(default = "RuleId::generate")]
    name: RuleId,
    warehouse: WarehouseId,
    company: CompanyId,
    /// Rules are active unless stated otherwise, both here and in `Rule::new`.
    #[serde(default = "active_by_default", deserialize_with = "crate::fields::check")]
    is_active: bool,
    #[serde(default, rename = "allowed_item_group")]
    allowed_item_groups: Vec<AllowedItemGroup>,
    #[serde(default = "Utc::now")]
    modified: DateTime<Utc>,
}

fn active_by_default() -> bool {
    true
}

impl Rule {
    /// Create an active rule with no allowed groups yet.
    ///
    /// An active rule with an empty allowed set blocks every item group in its scope.
    pub fn new(name: RuleId, warehouse: WarehouseId, company: CompanyId) -> Self {
        Self {
            name,
            warehouse,
            company,
            is_active: true,
            allowed_item_groups: Vec::new(),
            modified: Utc::now(),
        }
    }

    pub fn with_allowed_group(mut self, item_group: impl Into<ItemGroupId>) -> Self {
        self.allowed_item_groups.push(AllowedItemGroup::new(item_group));
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = modified;
        self
    }

    pub fn name(&self) -> &RuleId {
        &self.name
    }

    pub fn warehouse(&self) -> &WarehouseId {
        &self.warehouse
    }

    pub fn company(&self) -> &CompanyId {
        &self.company
    }

    pub fn scope(&self) -> RuleScope {
        RuleScope::new(self.warehouse.clone(), self.company.clone())
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    pub fn allowed_item_groups(&self) -> &[AllowedItemGroup] {
        &self.allowed_item_groups
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn add_allowed_group(&mut self, item_group: impl Into<ItemGroupId>) {
        self.allowed_item_groups.push(AllowedItemGroup::new(item_group));
    }

    pub fn remove_allowed_group(&mut self, item_group: &ItemGroupId) {
        self.allowed_item_groups.retain(|g| &g.item_group != item_group);
    }

    /// Stamp the modification time (done by the store on every save).
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.modified = at;
    }

    /// Allowed item groups, skipping blank child rows.
    pub fn allowed_group_ids(&self) -> impl Iterator<Item = &ItemGroupId> {
        self.allowed_item_groups
            .iter()
            .map(|g| &g.item_group)
            .filter(|g| !g.is_blank())
    }

    /// Field-level checks that need no other records.
    pub fn validate(&self) -> DomainResult<()> {
        if self.warehouse.is_blank() {
            return Err(DomainError::validation("warehouse is required"));
        }
        if self.company.is_blank() {
            return Err(DomainError::validation("company is required"));
        }
        self.validate_unique_item_groups()
    }

    /// Reject an allowed-groups table that lists the same item group twice.
    pub fn validate_unique_item_groups(&self) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for group in self.allowed_group_ids() {
            if !seen.insert(group) {
                return Err(DomainError::validation(format!(
                    "Item Group <b>{group}</b> is duplicated in the Allowed Item Groups table."
                )));
            }
        }
        Ok(())
    }

    /// Reject activation when another active rule already covers this scope.
    ///
    /// `existing` are the active rules currently stored for the same scope; the
    /// rule itself (same name) is ignored so re-saving an active rule succeeds.
    pub fn validate_unique_active_rule<'a>(
        &self,
        existing: impl IntoIterator<Item = &'a RuleId>,
    ) -> DomainResult<()> {
        if !self.is_active {
            return Ok(());
        }
        if existing.into_iter().any(|other| other != &self.name) {
            return Err(DomainError::validation(format!(
                "An active Warehouse Item Group Rule already exists for Warehouse <b>{}</b> and Company <b>{}</b>.",
                self.warehouse, self.company
            )));
        }
        Ok(())
    }
}

impl Entity for Rule {
    type Id = RuleId;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
