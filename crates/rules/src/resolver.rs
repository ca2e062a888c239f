//! Active-rule resolution with request-scoped memoization.

use std::collections::{HashMap, HashSet};

use stockgate_core::{CompanyId, ItemGroupId, RuleId, WarehouseId};

use crate::lookup::{RuleCandidate, RuleLookup};
use crate::rule::RuleScope;

/// Answers "may this item group be stocked in this warehouse for this company?".
///
/// A resolver caches what it reads: the active rule per scope (including "no
/// rule") and the allowed groups per rule. It must not outlive the unit of work
/// it was created for, since rules may change between requests. The validator
/// builds a fresh one for every pass.
pub struct RuleResolver<'a, L: RuleLookup + ?Sized> {
    lookup: &'a L,
    active_rules: HashMap<RuleScope, Option<RuleId>>,
    allowed_groups: HashMap<RuleId, HashSet<ItemGroupId>>,
}

impl<'a, L: RuleLookup + ?Sized> RuleResolver<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self {
            lookup,
            active_rules: HashMap::new(),
            allowed_groups: HashMap::new(),
        }
    }

    /// Default-open: without an active rule every item group is allowed.
    pub fn is_allowed(
        &mut self,
        warehouse: &WarehouseId,
        item_group: &ItemGroupId,
        company: &CompanyId,
    ) -> bool {
        let Some(rule) = self.find_active_rule(warehouse, company) else {
            return true;
        };
        self.allowed_groups(&rule).contains(item_group)
    }

    /// The active rule for a scope, if any.
    ///
    /// Several active rules for one scope is a data-integrity anomaly. The most
    /// recently modified one wins (ties broken by name) and the anomaly is logged.
    pub fn find_active_rule(&mut self, warehouse: &WarehouseId, company: &CompanyId) -> Option<RuleId> {
        let scope = RuleScope::new(warehouse.clone(), company.clone());
        if let Some(cached) = self.active_rules.get(&scope) {
            return cached.clone();
        }

        let candidates = self.lookup.active_rules(warehouse, company);
        let resolved = pick_active_rule(&scope, candidates);
        self.active_rules.insert(scope, resolved.clone());
        resolved
    }

    /// Allowed item groups of a rule, materialized once per resolver.
    pub fn allowed_groups(&mut self, rule: &RuleId) -> &HashSet<ItemGroupId> {
        let lookup = self.lookup;
        self.allowed_groups.entry(rule.clone()).or_insert_with(|| {
            lookup
                .allowed_item_groups(rule)
                .into_iter()
                .filter(|g| !g.is_blank())
                .collect()
        })
    }
}

fn pick_active_rule(scope: &RuleScope, mut candidates: Vec<RuleCandidate>) -> Option<RuleId> {
    if candidates.len() > 1 {
        candidates.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        tracing::warn!(
            warehouse = %scope.warehouse,
            company = %scope.company,
            candidates = ?names,
            chosen = names[0],
            "multiple active warehouse item group rules for one scope"
        );
    }
    candidates.into_iter().next().map(|c| c.name)
}
