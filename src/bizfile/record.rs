//! Typed company record assembled from a recognized BizFile document.

use serde::Serialize;

/// Structured extraction output for one BizFile document.
///
/// Scalar fields default to empty strings when their labels are absent from
/// the recognized text; the sequences accumulate rows from every table
/// classified into the matching category, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyRecord {
    pub company_name: String,
    pub uen: String,
    pub incorporation_date: String,
    pub company_type: String,
    pub financial_year_end: String,
    pub registered_address: String,
    pub business_activity_primary: String,
    pub business_activity_secondary: String,
    pub officers: Vec<Officer>,
    pub shareholders: Vec<Shareholder>,
    pub issued_share_capital: Vec<CapitalEntry>,
    pub paid_up_capital: Vec<CapitalEntry>,
    pub charges: Vec<Charge>,
}

/// One officer row from an officers table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Officer {
    pub name: String,
    pub id_number: String,
    pub address: String,
    /// Falls back to `DIRECTOR` when the source cell is absent or empty.
    pub designation: String,
    pub nationality: String,
    /// May be empty; not every layout variant carries the column.
    pub appointment_date: String,
}

/// One shareholder row from a shareholders table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Shareholder {
    pub name: String,
    pub id_number: String,
    pub shares_count: u64,
    pub address: String,
}

/// One issued or paid-up capital row.
///
/// Amount and share figures stay raw strings; their source formatting is
/// too inconsistent to parse numerically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CapitalEntry {
    pub amount: String,
    pub shares: String,
    pub currency: String,
    #[serde(rename = "type")]
    pub capital_type: String,
}

/// One registered charge row from a charges table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Charge {
    pub charge_number: String,
    pub date_registered: String,
    pub currency: String,
    pub amount: String,
}
