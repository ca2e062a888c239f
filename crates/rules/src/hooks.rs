//! Document lifecycle hooks exposed to the host.

use crate::document::TransactionDocument;
use crate::error::ValidationError;
use crate::lookup::{RuleLookup, SettingsStore};
use crate::validator::TransactionValidator;

/// Document events the validator is registered for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LifecycleHook {
    /// Draft save; the user can still edit and retry.
    BeforeSave,
    /// Final submit; a failure keeps the document unlocked.
    BeforeSubmit,
}

impl LifecycleHook {
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleHook::BeforeSave => "before_save",
            LifecycleHook::BeforeSubmit => "before_submit",
        }
    }
}

/// Run the validator for a lifecycle event. Both hooks share one entry point.
pub fn on_document_event<L, S>(
    hook: LifecycleHook,
    lookup: &L,
    settings: &S,
    doc: &TransactionDocument,
) -> Result<(), ValidationError>
where
    L: RuleLookup + ?Sized,
    S: SettingsStore + ?Sized,
{
    let span = tracing::debug_span!("warehouse_item_group_rules", hook = hook.as_str());
    let _guard = span.enter();
    TransactionValidator::new(lookup, settings).validate(doc)
}

pub fn before_save<L, S>(lookup: &L, settings: &S, doc: &TransactionDocument) -> Result<(), ValidationError>
where
    L: RuleLookup + ?Sized,
    S: SettingsStore + ?Sized,
{
    on_document_event(LifecycleHook::BeforeSave, lookup, settings, doc)
}

pub fn before_submit<L, S>(lookup: &L, settings: &S, doc: &TransactionDocument) -> Result<(), ValidationError>
where
    L: RuleLookup + ?Sized,
    S: SettingsStore + ?Sized,
{
    on_document_event(LifecycleHook::BeforeSubmit, lookup, settings, doc)
}
