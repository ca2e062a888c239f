//! Per-pass lookup state.

use std::collections::HashMap;

use stockgate_core::{ItemCode, ItemGroupId};

use crate::document::TransactionDocument;
use crate::error::Violation;
use crate::lookup::RuleLookup;
use crate::resolver::RuleResolver;

/// Caches for one validation pass: the rule resolver plus item → group lookups.
///
/// Created at the start of a pass and dropped at the end, so nothing read here
/// leaks into the next request.
pub struct ValidationContext<'a, L: RuleLookup + ?Sized> {
    lookup: &'a L,
    resolver: RuleResolver<'a, L>,
    item_groups: HashMap<ItemCode, Option<ItemGroupId>>,
}

impl<'a, L: RuleLookup + ?Sized> ValidationContext<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self {
            lookup,
            resolver: RuleResolver::new(lookup),
            item_groups: HashMap::new(),
        }
    }

    pub fn item_group(&mut self, item: &ItemCode) -> Option<ItemGroupId> {
        let lookup = self.lookup;
        self.item_groups
            .entry(item.clone())
            .or_insert_with(|| lookup.item_group(item).filter(|g| !g.is_blank()))
            .clone()
    }

    /// Walk every row and collect violations in row order (source before target).
    pub fn collect_violations(&mut self, doc: &TransactionDocument) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (row_no, row) in doc.numbered_rows() {
            let Some(item) = row.item() else {
                continue;
            };

            let Some(item_group) = self.item_group(item) else {
                tracing::debug!(row = row_no, item = %item, "item has no item group; row skipped");
                continue;
            };

            for warehouse in doc.doctype.row_warehouses(row) {
                if !self.resolver.is_allowed(warehouse, &item_group, &doc.company) {
                    violations.push(Violation {
                        row: row_no,
                        item: item.clone(),
                        item_group: item_group.clone(),
                        warehouse: warehouse.clone(),
                    });
                }
            }
        }

        violations
    }
}
