use std::collections::HashMap;
use std::sync::RwLock;

use stockgate_core::{DomainError, DomainResult};
use stockgate_rules::{CustomField, FieldType, SettingsStore};

#[derive(Debug, Clone)]
struct FieldState {
    field: CustomField,
    value: Option<bool>,
}

/// In-memory singleton settings with custom field provisioning.
#[derive(Debug, Default)]
pub struct InMemorySettings {
    fields: RwLock<HashMap<(String, String), FieldState>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a provisioned check field (what an administrator does in the settings form).
    pub fn set_flag(&self, doctype: &str, fieldname: &str, value: bool) -> DomainResult<()> {
        let mut fields = self
            .fields
            .write()
            .map_err(|_| DomainError::conflict("settings lock poisoned"))?;

        let state = fields
            .get_mut(&(doctype.to_owned(), fieldname.to_owned()))
            .ok_or_else(|| DomainError::not_found(format!("custom field {doctype}.{fieldname}")))?;

        if state.field.fieldtype != FieldType::Check {
            return Err(DomainError::validation(format!(
                "{doctype}.{fieldname} is not a check field"
            )));
        }
        state.value = Some(value);
        Ok(())
    }

    /// Provisioned fields of a settings doctype.
    pub fn fields(&self, doctype: &str) -> Vec<CustomField> {
        let fields = match self.fields.read() {
            Ok(f) => f,
            Err(_) => return vec![],
        };
        let mut out: Vec<CustomField> = fields
            .values()
            .filter(|s| s.field.doctype == doctype)
            .map(|s| s.field.clone())
            .collect();
        out.sort_by(|a, b| a.fieldname.cmp(&b.fieldname));
        out
    }
}

impl SettingsStore for InMemorySettings {
    fn get_flag(&self, doctype: &str, fieldname: &str) -> Option<bool> {
        let fields = self.fields.read().ok()?;
        fields
            .get(&(doctype.to_owned(), fieldname.to_owned()))
            .and_then(|s| s.value)
    }

    fn provision_field(&self, field: &CustomField) {
        if let Ok(mut fields) = self.fields.write() {
            fields
                .entry((field.doctype.clone(), field.fieldname.clone()))
                .or_insert_with(|| FieldState {
                    field: field.clone(),
                    value: field.default,
                });
        }
    }

    fn remove_field(&self, doctype: &str, fieldname: &str) {
        if let Ok(mut fields) = self.fields.write() {
            fields.remove(&(doctype.to_owned(), fieldname.to_owned()));
        }
    }
}
