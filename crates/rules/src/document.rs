use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockgate_core::{CompanyId, DomainError, ItemCode, WarehouseId};

/// Stock transaction document types the validator understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Stock Entry")]
    StockEntry,
    #[serde(rename = "Sales Invoice")]
    SalesInvoice,
    #[serde(rename = "Purchase Invoice")]
    PurchaseInvoice,
    #[serde(rename = "Delivery Note")]
    DeliveryNote,
    #[serde(rename = "Purchase Receipt")]
    PurchaseReceipt,
    #[serde(rename = "Stock Reconciliation")]
    StockReconciliation,
}

/// Which row fields hold warehouse references for a document type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WarehouseFields {
    /// `warehouse`
    Single,
    /// `s_warehouse` and `t_warehouse`, checked independently.
    SourceAndTarget,
}

impl DocumentType {
    pub const ALL: [DocumentType; 6] = [
        DocumentType::StockEntry,
        DocumentType::SalesInvoice,
        DocumentType::PurchaseInvoice,
        DocumentType::DeliveryNote,
        DocumentType::PurchaseReceipt,
        DocumentType::StockReconciliation,
    ];

    /// Host display name, e.g. "Stock Entry".
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::StockEntry => "Stock Entry",
            DocumentType::SalesInvoice => "Sales Invoice",
            DocumentType::PurchaseInvoice => "Purchase Invoice",
            DocumentType::DeliveryNote => "Delivery Note",
            DocumentType::PurchaseReceipt => "Purchase Receipt",
            DocumentType::StockReconciliation => "Stock Reconciliation",
        }
    }

    pub fn warehouse_fields(self) -> WarehouseFields {
        match self {
            DocumentType::StockEntry => WarehouseFields::SourceAndTarget,
            _ => WarehouseFields::Single,
        }
    }

    /// Invoices only move stock when their "update stock" toggle is set.
    pub fn is_invoice(self) -> bool {
        matches!(self, DocumentType::SalesInvoice | DocumentType::PurchaseInvoice)
    }

    /// Non-blank warehouse references of a row, in field order (source before target).
    pub fn row_warehouses<'r>(self, row: &'r DocumentRow) -> impl Iterator<Item = &'r WarehouseId> {
        let slots = match self.warehouse_fields() {
            WarehouseFields::SourceAndTarget => [row.s_warehouse.as_ref(), row.t_warehouse.as_ref()],
            WarehouseFields::Single => [row.warehouse.as_ref(), None],
        };
        slots.into_iter().flatten().filter(|w| !w.is_blank())
    }
}

impl core::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| DomainError::validation(format!("unsupported document type: {s}")))
    }
}

/// One line of a transaction document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRow {
    #[serde(default, deserialize_with = "crate::fields::link")]
    pub item_code: Option<ItemCode>,
    #[serde(default, deserialize_with = "crate::fields::link")]
    pub warehouse: Option<WarehouseId>,
    #[serde(default, deserialize_with = "crate::fields::link")]
    pub s_warehouse: Option<WarehouseId>,
    #[serde(default, deserialize_with = "crate::fields::link")]
    pub t_warehouse: Option<WarehouseId>,
}

impl DocumentRow {
    /// Row for a single-warehouse document.
    pub fn single(item_code: impl Into<ItemCode>, warehouse: impl Into<WarehouseId>) -> Self {
        Self {
            item_code: Some(item_code.into()),
            warehouse: Some(warehouse.into()),
            ..Self::default()
        }
    }

    /// Row for a transfer; either side may be unset.
    pub fn transfer(
        item_code: impl Into<ItemCode>,
        source: Option<WarehouseId>,
        target: Option<WarehouseId>,
    ) -> Self {
        Self {
            item_code: Some(item_code.into()),
            s_warehouse: source,
            t_warehouse: target,
            ..Self::default()
        }
    }

    /// Item code when set and non-blank.
    pub fn item(&self) -> Option<&ItemCode> {
        self.item_code.as_ref().filter(|code| !code.is_blank())
    }
}

/// Stock transaction document as handed over by the host on save/submit.
///
/// Read-only from the validator's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub doctype: DocumentType,
    pub company: CompanyId,
    #[serde(default, deserialize_with = "crate::fields::check")]
    pub update_stock: bool,
    #[serde(default)]
    pub items: Vec<DocumentRow>,
}

impl TransactionDocument {
    pub fn new(doctype: DocumentType, company: impl Into<CompanyId>) -> Self {
        Self {
            name: None,
            doctype,
            company: company.into(),
            update_stock: false,
            items: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_update_stock(mut self, update_stock: bool) -> Self {
        self.update_stock = update_stock;
        self
    }

    pub fn with_row(mut self, row: DocumentRow) -> Self {
        self.items.push(row);
        self
    }

    /// False for invoices whose stock toggle is off; such documents are exempt.
    pub fn moves_stock(&self) -> bool {
        !self.doctype.is_invoice() || self.update_stock
    }

    /// Rows with their 1-based positions, as shown to users.
    pub fn numbered_rows(&self) -> impl Iterator<Item = (usize, &DocumentRow)> {
        self.items.iter().enumerate().map(|(i, row)| (i + 1, row))
    }

    /// Name for log fields; unsaved documents have none yet.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<new>")
    }
}
