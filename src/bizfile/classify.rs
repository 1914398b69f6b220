//! Heuristic table classification over cell-text signatures.
//!
//! A table's signature (the uppercased space-join of its cells) is tested
//! against a fixed rule table. Rules are independent predicates: one table
//! can match several categories, and every match routes the table to the
//! corresponding row mapper.

use tracing::debug;

/// Semantic categories a recognized table can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCategory {
    Officers,
    Shareholders,
    Charges,
    IssuedCapital,
    PaidUpCapital,
}

impl TableCategory {
    /// Lowercase label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableCategory::Officers => "officers",
            TableCategory::Shareholders => "shareholders",
            TableCategory::Charges => "charges",
            TableCategory::IssuedCapital => "issued_capital",
            TableCategory::PaidUpCapital => "paid_up_capital",
        }
    }
}

/// One classification rule: a named predicate over the signature.
struct ClassificationRule {
    name: &'static str,
    test: fn(&str) -> Option<TableCategory>,
}

/// Rule table. Every rule runs for every table; matches accumulate.
const RULES: [ClassificationRule; 4] = [
    ClassificationRule { name: "officers", test: officers_rule },
    ClassificationRule { name: "shareholders", test: shareholders_rule },
    ClassificationRule { name: "charges", test: charges_rule },
    ClassificationRule { name: "capital", test: capital_rule },
];

fn officers_rule(signature: &str) -> Option<TableCategory> {
    if signature.contains("DESIGNATION") || signature.contains("DATE OF APPOINTMENT") {
        Some(TableCategory::Officers)
    } else {
        None
    }
}

fn shareholders_rule(signature: &str) -> Option<TableCategory> {
    if signature.contains("SHAREHOLDER")
        || (signature.contains("SHARES") && signature.contains("ADDRESS"))
    {
        Some(TableCategory::Shareholders)
    } else {
        None
    }
}

fn charges_rule(signature: &str) -> Option<TableCategory> {
    if signature.contains("CHARGE NUMBER") || signature.contains("AMOUNT SECURED") {
        Some(TableCategory::Charges)
    } else {
        None
    }
}

/// Capital tables mention the share class; the paid-up marker picks the
/// bucket, otherwise the table counts as issued capital.
fn capital_rule(signature: &str) -> Option<TableCategory> {
    if !signature.contains("ORDINARY") {
        return None;
    }
    if signature.contains("PAID-UP") {
        Some(TableCategory::PaidUpCapital)
    } else if signature.contains("ISSUED") {
        Some(TableCategory::IssuedCapital)
    } else {
        None
    }
}

/// All categories whose rule matches the signature, in rule order.
pub fn classify(signature: &str) -> Vec<TableCategory> {
    RULES
        .iter()
        .filter_map(|rule| {
            let matched = (rule.test)(signature);
            if let Some(category) = matched {
                debug!(rule = rule.name, category = category.as_str(), "table signature matched");
            }
            matched
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designation_header_marks_an_officers_table() {
        assert_eq!(
            classify("NAME ID ADDRESS NATIONALITY DESIGNATION"),
            vec![TableCategory::Officers]
        );
    }

    #[test]
    fn appointment_header_marks_an_officers_table() {
        assert_eq!(
            classify("NAME DATE OF APPOINTMENT"),
            vec![TableCategory::Officers]
        );
    }

    #[test]
    fn shareholder_keyword_marks_a_shareholders_table() {
        assert_eq!(
            classify("SHAREHOLDER NAME ID NUMBER OF SHARES"),
            vec![TableCategory::Shareholders]
        );
    }

    #[test]
    fn shares_and_address_together_mark_a_shareholders_table() {
        assert_eq!(
            classify("NAME NUMBER OF SHARES ADDRESS"),
            vec![TableCategory::Shareholders]
        );
    }

    #[test]
    fn shares_without_address_is_not_a_shareholders_table() {
        assert!(classify("NUMBER OF SHARES HELD").is_empty());
    }

    #[test]
    fn charge_headers_mark_a_charges_table() {
        assert_eq!(
            classify("CHARGE NUMBER DATE REGISTERED CURRENCY"),
            vec![TableCategory::Charges]
        );
        assert_eq!(
            classify("AMOUNT SECURED CHARGEE"),
            vec![TableCategory::Charges]
        );
    }

    #[test]
    fn ordinary_with_paid_up_marks_paid_up_capital() {
        assert_eq!(
            classify("PAID-UP SHARE CAPITAL AMOUNT ORDINARY SINGAPORE DOLLARS"),
            vec![TableCategory::PaidUpCapital]
        );
    }

    #[test]
    fn ordinary_with_issued_marks_issued_capital() {
        assert_eq!(
            classify("ISSUED SHARE CAPITAL AMOUNT ORDINARY SINGAPORE DOLLARS"),
            vec![TableCategory::IssuedCapital]
        );
    }

    #[test]
    fn paid_up_wins_when_both_capital_markers_appear() {
        assert_eq!(
            classify("ISSUED AND PAID-UP CAPITAL ORDINARY"),
            vec![TableCategory::PaidUpCapital]
        );
    }

    #[test]
    fn ordinary_alone_is_not_a_capital_table() {
        assert!(classify("ORDINARY RESOLUTION PASSED").is_empty());
    }

    #[test]
    fn one_signature_can_match_several_categories() {
        assert_eq!(
            classify("SHAREHOLDER ADDRESS SHARES CHARGE NUMBER"),
            vec![TableCategory::Shareholders, TableCategory::Charges]
        );
    }

    #[test]
    fn unrecognized_signature_matches_nothing() {
        assert!(classify("SOME UNRELATED TABLE").is_empty());
    }
}
