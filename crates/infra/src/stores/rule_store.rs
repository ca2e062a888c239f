use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use stockgate_core::{CompanyId, DomainError, DomainResult, Entity, ItemGroupId, RuleId, WarehouseId};
use stockgate_rules::{Rule, RuleCandidate};

/// Write side for warehouse item group rules.
///
/// `save` enforces the write-time invariants (one active rule per scope, no
/// duplicate allowed groups); `delete` drops the rule with its allowed groups.
pub trait RuleStore: Send + Sync {
    fn get(&self, name: &RuleId) -> Option<Rule>;
    fn save(&self, rule: Rule) -> DomainResult<Rule>;
    fn delete(&self, name: &RuleId) -> DomainResult<Rule>;
    fn list(&self) -> Vec<Rule>;
}

impl<S> RuleStore for Arc<S>
where
    S: RuleStore + ?Sized,
{
    fn get(&self, name: &RuleId) -> Option<Rule> {
        (**self).get(name)
    }

    fn save(&self, rule: Rule) -> DomainResult<Rule> {
        (**self).save(rule)
    }

    fn delete(&self, name: &RuleId) -> DomainResult<Rule> {
        (**self).delete(name)
    }

    fn list(&self) -> Vec<Rule> {
        (**self).list()
    }
}

/// In-memory rule store for tests, dev, and embedding hosts without a database.
#[derive(Debug, Default)]
pub struct InMemoryRuleStore {
    inner: RwLock<HashMap<RuleId, Rule>>,
}

impl InMemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active rules for a scope, as the read path sees them.
    pub fn active_rules(&self, warehouse: &WarehouseId, company: &CompanyId) -> Vec<RuleCandidate> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values()
            .filter(|r| r.is_active() && r.warehouse() == warehouse && r.company() == company)
            .map(|r| RuleCandidate {
                name: r.name().clone(),
                modified: r.modified(),
            })
            .collect()
    }

    pub fn allowed_item_groups(&self, name: &RuleId) -> Vec<ItemGroupId> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.get(name)
            .map(|r| r.allowed_group_ids().cloned().collect())
            .unwrap_or_default()
    }
}

impl RuleStore for InMemoryRuleStore {
    fn get(&self, name: &RuleId) -> Option<Rule> {
        let map = self.inner.read().ok()?;
        map.get(name).cloned()
    }

    fn save(&self, mut rule: Rule) -> DomainResult<Rule> {
        // Check and insert under one guard so concurrent activations serialize.
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("rule store lock poisoned"))?;

        rule.validate()?;
        let scope = rule.scope();
        rule.validate_unique_active_rule(
            map.values()
                .filter(|r| r.is_active() && r.scope() == scope)
                .map(Rule::name),
        )?;

        rule.touch(Utc::now());
        tracing::debug!(
            rule = %rule.name(),
            warehouse = %rule.warehouse(),
            company = %rule.company(),
            active = rule.is_active(),
            "warehouse item group rule saved"
        );
        map.insert(rule.id().clone(), rule.clone());
        Ok(rule)
    }

    fn delete(&self, name: &RuleId) -> DomainResult<Rule> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("rule store lock poisoned"))?;

        map.remove(name)
            .ok_or_else(|| DomainError::not_found(format!("Warehouse Item Group Rule {name}")))
    }

    fn list(&self) -> Vec<Rule> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        let mut rules: Vec<Rule> = map.values().cloned().collect();
        rules.sort_by(|a, b| a.name().cmp(b.name()));
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, warehouse: &str, company: &str) -> Rule {
        Rule::new(RuleId::from(name), WarehouseId::from(warehouse), CompanyId::from(company))
    }

    #[test]
    fn second_active_rule_for_scope_is_rejected() {
        let store = InMemoryRuleStore::new();
        store.save(rule("R1", "WH-A", "C1").with_allowed_group("Raw Material")).unwrap();

        let err = store.save(rule("R2", "WH-A", "C1")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("already exists")));
        assert!(store.get(&RuleId::from("R2")).is_none());
    }

    #[test]
    fn inactive_duplicate_scope_is_accepted_and_cannot_be_activated() {
        let store = InMemoryRuleStore::new();
        store.save(rule("R1", "WH-A", "C1")).unwrap();
        let draft = store.save(rule("R2", "WH-A", "C1").with_active(false)).unwrap();

        let mut activated = draft.clone();
        activated.set_active(true);
        assert!(store.save(activated).is_err());

        let mut r1 = store.get(&RuleId::from("R1")).unwrap();
        r1.set_active(false);
        store.save(r1).unwrap();

        let mut activated = draft;
        activated.set_active(true);
        assert!(store.save(activated).is_ok());
    }

    #[test]
    fn same_scope_in_another_company_is_independent() {
        let store = InMemoryRuleStore::new();
        store.save(rule("R1", "WH-A", "C1")).unwrap();
        assert!(store.save(rule("R2", "WH-A", "C2")).is_ok());

        let names: Vec<String> = store.list().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["R1", "R2"]);
    }

    #[test]
    fn resave_of_active_rule_succeeds() {
        let store = InMemoryRuleStore::new();
        let saved = store.save(rule("R1", "WH-A", "C1")).unwrap();
        let updated = saved.with_allowed_group("Consumable");
        let saved = store.save(updated).unwrap();
        assert_eq!(
            store.allowed_item_groups(saved.name()),
            vec![ItemGroupId::from("Consumable")]
        );
    }

    #[test]
    fn duplicate_allowed_group_is_rejected_on_save() {
        let store = InMemoryRuleStore::new();
        let err = store
            .save(
                rule("R1", "WH-A", "C1")
                    .with_allowed_group("Raw Material")
                    .with_allowed_group("Raw Material"),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("duplicated")));
    }

    #[test]
    fn delete_cascades_allowed_groups() {
        let store = InMemoryRuleStore::new();
        store.save(rule("R1", "WH-A", "C1").with_allowed_group("Raw Material")).unwrap();

        store.delete(&RuleId::from("R1")).unwrap();
        assert!(store.allowed_item_groups(&RuleId::from("R1")).is_empty());
        assert!(store.active_rules(&WarehouseId::from("WH-A"), &CompanyId::from("C1")).is_empty());
        assert_eq!(
            store.delete(&RuleId::from("R1")).unwrap_err(),
            DomainError::not_found("Warehouse Item Group Rule R1")
        );
    }

    #[test]
    fn concurrent_activations_leave_one_active_rule() {
        let store = Arc::new(InMemoryRuleStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.save(rule(&format!("R{i}"), "WH-A", "C1")).is_ok())
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(accepted, 1);
        assert_eq!(
            store.active_rules(&WarehouseId::from("WH-A"), &CompanyId::from("C1")).len(),
            1
        );
    }
}
