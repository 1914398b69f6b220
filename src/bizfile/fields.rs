//! Labeled-field extraction from recognized document text.
//!
//! The BizFile profile section comes back as free text with `Label: value`
//! runs. Each scalar field has one rule: a case-insensitive pattern whose
//! capture runs from the label up to the next known label or the end of the
//! text. The rules live in an ordered table so layout variants can add or
//! reorder patterns without touching control flow.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bizfile::record::CompanyRecord;
use crate::bizfile::text::normalize;

/// Scalar fields recognized in the profile text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    CompanyName,
    Uen,
    IncorporationDate,
    CompanyType,
    FinancialYearEnd,
    RegisteredAddress,
    PrimaryActivity,
    SecondaryActivity,
}

impl CompanyField {
    /// Stores a value into the record slot this field owns.
    fn assign(self, record: &mut CompanyRecord, value: String) {
        match self {
            CompanyField::CompanyName => record.company_name = value,
            CompanyField::Uen => record.uen = value,
            CompanyField::IncorporationDate => record.incorporation_date = value,
            CompanyField::CompanyType => record.company_type = value,
            CompanyField::FinancialYearEnd => record.financial_year_end = value,
            CompanyField::RegisteredAddress => record.registered_address = value,
            CompanyField::PrimaryActivity => record.business_activity_primary = value,
            CompanyField::SecondaryActivity => record.business_activity_secondary = value,
        }
    }
}

/// One labeled-field rule; the pattern's first capture group holds the
/// value.
struct FieldRule {
    field: CompanyField,
    pattern: Regex,
}

impl FieldRule {
    fn new(field: CompanyField, pattern: &str) -> Self {
        Self {
            field,
            pattern: Regex::new(pattern).expect("Invalid field pattern"),
        }
    }
}

/// Ordered rule table for the profile fields.
///
/// Boundary labels are consumed rather than asserted; only the capture is
/// read, so the value still stops at the next label or the end of text.
static FIELD_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::new(
            CompanyField::CompanyName,
            r"(?is)Name of Company\s*:\s*(.*?)(?:Former Name|UEN|$)",
        ),
        FieldRule::new(CompanyField::Uen, r"(?i)UEN\s*:\s*(\w+)"),
        FieldRule::new(
            CompanyField::IncorporationDate,
            r"(?i)Incorporation Date\s*:\s*(.*)",
        ),
        // The type value sits between the label and its own trailing colon
        // in this layout, so the boundary here is the colon itself.
        FieldRule::new(
            CompanyField::CompanyType,
            r"(?is)Company Type\s*(.*?)(?:\s*:|$)",
        ),
        FieldRule::new(
            CompanyField::FinancialYearEnd,
            r"(?i)FYE As At Date of Last AR\s*:\s*(.*)",
        ),
        FieldRule::new(
            CompanyField::RegisteredAddress,
            r"(?is)Registered Office Address\s*:\s*(.*?)(?:Date of Address|$)",
        ),
        FieldRule::new(
            CompanyField::PrimaryActivity,
            r"(?is)Primary Activity\s*:\s*(.*?)(?:Secondary Activity|$)",
        ),
        FieldRule::new(
            CompanyField::SecondaryActivity,
            r"(?is)Secondary Activity\s*:\s*(.*?)(?:Verify Document|$)",
        ),
    ]
});

/// Applies one rule to the full document text.
///
/// Returns the normalized capture, or an empty string when the label is
/// absent. Extraction is always best-effort.
fn extract_field(content: &str, rule: &FieldRule) -> String {
    rule.pattern
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|capture| normalize(capture.as_str()))
        .unwrap_or_default()
}

/// Runs every field rule against the content, filling the record's scalar
/// fields. Fields whose labels are missing keep their defaults.
pub fn extract_fields(record: &mut CompanyRecord, content: &str) {
    for rule in FIELD_RULES.iter() {
        rule.field.assign(record, extract_field(content, rule));
    }
}
