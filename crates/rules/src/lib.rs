//! Warehouse item group rules.
//!
//! Restricts which item groups may be stocked in which warehouses. The host
//! calls `before_save` / `before_submit` for stock transactions; every
//! violating (row, warehouse) pair is collected and returned as one
//! `ValidationError`. Pure domain logic: host data is read through the
//! `RuleLookup` and `SettingsStore` traits.

pub mod context;
pub mod document;
pub mod error;
pub mod hooks;
pub mod lookup;
pub mod resolver;
pub mod rule;
pub mod settings;
pub mod validator;

mod fields;
#[cfg(test)]
mod test_support;

pub use context::ValidationContext;
pub use document::{DocumentRow, DocumentType, TransactionDocument, WarehouseFields};
pub use error::{RESTRICTION_TITLE, RestrictionMessage, ValidationError, Violation};
pub use hooks::{LifecycleHook, before_save, before_submit, on_document_event};
pub use lookup::{RuleCandidate, RuleLookup, SettingsStore};
pub use resolver::RuleResolver;
pub use rule::{AllowedItemGroup, Rule, RuleScope};
pub use settings::{
    CustomField, ENABLE_RULES_FIELD, FieldType, SETTINGS_DOCTYPE, after_install, before_uninstall,
    custom_fields, is_feature_enabled,
};
pub use validator::TransactionValidator;
