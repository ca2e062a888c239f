//! Feature flag and the custom fields that carry it.

use serde::{Deserialize, Serialize};

use crate::lookup::SettingsStore;

/// Settings document holding the flag.
pub const SETTINGS_DOCTYPE: &str = "Stock Settings";

/// Check field that turns validation on or off globally.
pub const ENABLE_RULES_FIELD: &str = "custom_enable_warehouse_item_group_rules";

const SECTION_FIELD: &str = "custom_item_group_rules";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "Section Break")]
    SectionBreak,
    Check,
}

/// Custom field definition provisioned on the host's settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub doctype: String,
    pub fieldname: String,
    pub fieldtype: FieldType,
    pub label: String,
    pub insert_after: String,
    /// Initial value for check fields.
    #[serde(default)]
    pub default: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Fields created on install and removed on uninstall, in insertion order.
pub fn custom_fields(enabled_by_default: bool) -> Vec<CustomField> {
    vec![
        CustomField {
            doctype: SETTINGS_DOCTYPE.to_owned(),
            fieldname: SECTION_FIELD.to_owned(),
            fieldtype: FieldType::SectionBreak,
            label: "Item Group Rules".to_owned(),
            insert_after: "validate_material_transfer_warehouses".to_owned(),
            default: None,
            description: None,
        },
        CustomField {
            doctype: SETTINGS_DOCTYPE.to_owned(),
            fieldname: ENABLE_RULES_FIELD.to_owned(),
            fieldtype: FieldType::Check,
            label: "Enable Warehouse Item Group Rules".to_owned(),
            insert_after: SECTION_FIELD.to_owned(),
            default: Some(enabled_by_default),
            description: Some(
                "If enabled, stock transactions will be validated to ensure that only allowed \
                 Item Groups can be used in each Warehouse. Disable this option to temporarily \
                 bypass all Item Group rules."
                    .to_owned(),
            ),
        },
    ]
}

/// Whether validation runs. An unprovisioned field reads as disabled.
pub fn is_feature_enabled<S: SettingsStore + ?Sized>(settings: &S) -> bool {
    settings
        .get_flag(SETTINGS_DOCTYPE, ENABLE_RULES_FIELD)
        .unwrap_or(false)
}

/// Install hook: provision the settings fields.
pub fn after_install<S: SettingsStore + ?Sized>(settings: &S, enabled_by_default: bool) {
    for field in custom_fields(enabled_by_default) {
        settings.provision_field(&field);
    }
    tracing::info!(
        doctype = SETTINGS_DOCTYPE,
        enabled = is_feature_enabled(settings),
        "warehouse item group rule settings provisioned"
    );
}

/// Uninstall hook: remove the settings fields.
pub fn before_uninstall<S: SettingsStore + ?Sized>(settings: &S) {
    for field in custom_fields(true) {
        settings.remove_field(&field.doctype, &field.fieldname);
    }
    tracing::info!(doctype = SETTINGS_DOCTYPE, "warehouse item group rule settings removed");
}
