//! Assembly of a company record from a completed layout analysis.

use tracing::debug;

use crate::azure::result::AnalyzeResult;
use crate::bizfile::classify::{classify, TableCategory};
use crate::bizfile::fields::extract_fields;
use crate::bizfile::grid::Grid;
use crate::bizfile::record::CompanyRecord;
use crate::bizfile::rows::{map_capital, map_charges, map_officers, map_shareholders};

/// Transforms a recognition result into a structured company record.
///
/// Scalar fields come from the recognized text; each table is rebuilt as a
/// grid, classified by signature, and routed to every mapper whose rule
/// matched. Source table order and within-table row order are preserved.
/// Absent labels and unmatched tables leave defaults in place; assembly
/// never fails.
pub fn assemble(result: &AnalyzeResult) -> CompanyRecord {
    let mut record = CompanyRecord::default();
    extract_fields(&mut record, &result.content);
    for table in &result.tables {
        let grid = Grid::from_table(table);
        apply_table(&mut record, &grid);
    }
    record
}

/// Routes one grid to the mappers of every category its signature matched,
/// appending the mapped rows to the record.
pub fn apply_table(record: &mut CompanyRecord, grid: &Grid) {
    let signature = grid.signature();
    for category in classify(&signature) {
        debug!(category = category.as_str(), "mapping classified table");
        match category {
            TableCategory::Officers => record.officers.extend(map_officers(grid)),
            TableCategory::Shareholders => record.shareholders.extend(map_shareholders(grid)),
            TableCategory::Charges => record.charges.extend(map_charges(grid)),
            TableCategory::IssuedCapital => {
                record.issued_share_capital.extend(map_capital(grid))
            }
            TableCategory::PaidUpCapital => record.paid_up_capital.extend(map_capital(grid)),
        }
    }
}
