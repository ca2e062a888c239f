//! Strongly-typed identifiers used across the domain.
//!
//! The hosting ERP addresses records by human-readable names ("Stores - C1",
//! "Raw Material"), so identifiers are string newtypes rather than UUIDs.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a warehouse (stock location).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(String);

/// Identifier of a company. Rules are scoped by (warehouse, company).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(String);

/// Item code as referenced by transaction rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(String);

/// Identifier of an item group (classification tag attached to an item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemGroupId(String);

/// Name of a warehouse item group rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

macro_rules! impl_name_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a name as-is. Blank names are allowed here because host
            /// records routinely carry unset link fields; use `parse` to reject them.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the name is empty or whitespace only (an unset link field).
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: name cannot be blank", $name)));
                }
                Ok(Self(trimmed.to_owned()))
            }
        }
    };
}

impl_name_newtype!(WarehouseId, "WarehouseId");
impl_name_newtype!(CompanyId, "CompanyId");
impl_name_newtype!(ItemCode, "ItemCode");
impl_name_newtype!(ItemGroupId, "ItemGroupId");
impl_name_newtype!(RuleId, "RuleId");

impl RuleId {
    /// Generate a fresh rule name for records created without one.
    ///
    /// Uses UUIDv7 so generated names sort by creation time.
    pub fn generate() -> Self {
        Self(format!("WIGR-{}", Uuid::now_v7().simple()))
    }
}
