//! Label field catalog
//!
//! The closed set of things an element on a label can show: one of the bound
//! production fields, whose value is supplied at render time, or free static
//! text typed by the operator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Element type
///
/// Bound variants take their value from a [`FieldValues`] context at render
/// time; `StaticText` shows the element's own custom text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    RawMaterial,
    ProductType,
    Variety,
    Quality,
    LotCode,
    Producer,
    Packaging,
    Weight,
    CaseCount,
    Date,
    PalletId,
    CompanyInfo,
    StaticText,
}

/// What the fallback placeholder for an unresolved field looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `---`
    Text,
    /// `0.00`
    Decimal,
    /// `0`
    Count,
    /// The current date
    Today,
}

impl ElementType {
    /// Every element type, in palette order
    pub const ALL: [ElementType; 13] = [
        ElementType::RawMaterial,
        ElementType::ProductType,
        ElementType::Variety,
        ElementType::Quality,
        ElementType::LotCode,
        ElementType::Producer,
        ElementType::Packaging,
        ElementType::Weight,
        ElementType::CaseCount,
        ElementType::Date,
        ElementType::PalletId,
        ElementType::CompanyInfo,
        ElementType::StaticText,
    ];

    /// Fixed display name, used as the element label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RawMaterial => "Raw Material",
            Self::ProductType => "Product Type",
            Self::Variety => "Variety",
            Self::Quality => "Quality",
            Self::LotCode => "Lot Code",
            Self::Producer => "Producer",
            Self::Packaging => "Packaging",
            Self::Weight => "Weight",
            Self::CaseCount => "Case Count",
            Self::Date => "Date",
            Self::PalletId => "Pallet ID",
            Self::CompanyInfo => "Company Info",
            Self::StaticText => "Static Text",
        }
    }

    /// Whether the element's value comes from the field-value context
    pub fn is_bound(&self) -> bool {
        !matches!(self, Self::StaticText)
    }

    /// Placeholder kind shown when a bound field has no value.
    ///
    /// `None` for static text, which never resolves through the context.
    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            Self::Weight => Some(Placeholder::Decimal),
            Self::CaseCount => Some(Placeholder::Count),
            Self::Date => Some(Placeholder::Today),
            Self::RawMaterial
            | Self::ProductType
            | Self::Variety
            | Self::Quality
            | Self::LotCode
            | Self::Producer
            | Self::Packaging
            | Self::PalletId
            | Self::CompanyInfo => Some(Placeholder::Text),
            Self::StaticText => None,
        }
    }

    /// Stable key used in serialized layouts (`"lotCode"`, `"staticText"`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            Self::RawMaterial => "rawMaterial",
            Self::ProductType => "productType",
            Self::Variety => "variety",
            Self::Quality => "quality",
            Self::LotCode => "lotCode",
            Self::Producer => "producer",
            Self::Packaging => "packaging",
            Self::Weight => "weight",
            Self::CaseCount => "caseCount",
            Self::Date => "date",
            Self::PalletId => "palletId",
            Self::CompanyInfo => "companyInfo",
            Self::StaticText => "staticText",
        }
    }

    /// Look a type up by its serialized key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Field-value context
///
/// Current values of the bound fields, supplied by the production-tracking
/// side at preview/print time. Missing keys fall back to placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: HashMap<ElementType, String>,
}

impl FieldValues {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: ElementType, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set the value for a field. Static text is never looked up, so it is ignored.
    pub fn insert(&mut self, field: ElementType, value: impl Into<String>) {
        if field.is_bound() {
            self.values.insert(field, value.into());
        }
    }

    /// Remove a field's value
    pub fn remove(&mut self, field: ElementType) -> Option<String> {
        self.values.remove(&field)
    }

    /// The value for a field, if one was supplied and is not blank
    pub fn get(&self, field: ElementType) -> Option<&str> {
        self.values
            .get(&field)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Number of supplied values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were supplied
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(ElementType, String)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (ElementType, String)>>(iter: I) -> Self {
        let mut values = FieldValues::new();
        for (field, value) in iter {
            values.insert(field, value);
        }
        values
    }
}
