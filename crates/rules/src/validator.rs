use crate::context::ValidationContext;
use crate::document::TransactionDocument;
use crate::error::ValidationError;
use crate::lookup::{RuleLookup, SettingsStore};
use crate::settings::is_feature_enabled;

/// Checks stock transactions against warehouse item group rules.
///
/// The validator itself holds no state between calls: each `validate` call
/// builds a fresh `ValidationContext`, so repeated validation of an unchanged
/// document yields the same outcome.
pub struct TransactionValidator<'a, L: RuleLookup + ?Sized, S: SettingsStore + ?Sized> {
    lookup: &'a L,
    settings: &'a S,
}

impl<'a, L, S> TransactionValidator<'a, L, S>
where
    L: RuleLookup + ?Sized,
    S: SettingsStore + ?Sized,
{
    pub fn new(lookup: &'a L, settings: &'a S) -> Self {
        Self { lookup, settings }
    }

    /// Validate every row and report all violations at once.
    ///
    /// Returns `Ok(())` without looking at rows when the feature flag is off or
    /// the document is an invoice that does not update stock.
    pub fn validate(&self, doc: &TransactionDocument) -> Result<(), ValidationError> {
        if !is_feature_enabled(self.settings) {
            tracing::debug!(doctype = %doc.doctype, "warehouse item group rules disabled");
            return Ok(());
        }

        if !doc.moves_stock() {
            tracing::debug!(
                doctype = %doc.doctype,
                document = doc.display_name(),
                "document does not update stock; skipping"
            );
            return Ok(());
        }

        let mut ctx = ValidationContext::new(self.lookup);
        let violations = ctx.collect_violations(doc);

        if violations.is_empty() {
            return Ok(());
        }

        tracing::info!(
            doctype = %doc.doctype,
            document = doc.display_name(),
            company = %doc.company,
            violations = violations.len(),
            "stock transaction blocked by warehouse item group rules"
        );
        Err(ValidationError::new(doc.doctype, violations))
    }
}
