//! Aggregated restriction failure reported back to the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockgate_core::{ItemCode, ItemGroupId, WarehouseId};

use crate::document::DocumentType;

/// Dialog title shown by the host when a save/submit is blocked.
pub const RESTRICTION_TITLE: &str = "Warehouse Item Group Restriction";

const GUIDANCE: [&str; 2] = [
    "This restriction is defined by an active Warehouse Item Group Rule.",
    "Please adjust the warehouse, item, or contact your system administrator.",
];

/// An item group used in a warehouse whose active rule does not allow it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// 1-based row position in the document.
    pub row: usize,
    pub item: ItemCode,
    pub item_group: ItemGroupId,
    pub warehouse: WarehouseId,
}

impl Violation {
    fn rich_line(&self) -> String {
        format!(
            "- Row {}: Item <b>{}</b> (Item Group: <b>{}</b>) is not allowed in Warehouse <b>{}</b>",
            self.row, self.item, self.item_group, self.warehouse
        )
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "- Row {}: Item {} (Item Group: {}) is not allowed in Warehouse {}",
            self.row, self.item, self.item_group, self.warehouse
        )
    }
}

/// Message payload for the host's blocking dialog (rich text body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionMessage {
    pub title: String,
    pub body: String,
}

/// Every restriction violation found in one validation pass.
///
/// Never empty: the validator only builds one when at least one row violates a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", render_plain(.doctype, .violations))]
pub struct ValidationError {
    doctype: DocumentType,
    violations: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn new(doctype: DocumentType, violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { doctype, violations }
    }

    pub fn doctype(&self) -> DocumentType {
        self.doctype
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Header, one line per violation, then guidance; joined with `<br>`.
    pub fn message(&self) -> RestrictionMessage {
        let lines: Vec<String> = self.violations.iter().map(Violation::rich_line).collect();
        let body = format!(
            "<b>{}</b> cannot be processed due to warehouse restrictions.<br><br>{}<br><br>{}",
            self.doctype,
            lines.join("<br>"),
            GUIDANCE.join("<br>"),
        );
        RestrictionMessage {
            title: RESTRICTION_TITLE.to_owned(),
            body,
        }
    }
}

fn render_plain(doctype: &DocumentType, violations: &[Violation]) -> String {
    let mut out = format!("{doctype} cannot be processed due to warehouse restrictions.\n\n");
    for v in violations {
        out.push_str(&v.to_string());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&GUIDANCE.join("\n"));
    out
}
