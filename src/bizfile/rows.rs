//! Row mappers projecting classified grids into record entries.
//!
//! Mappers silently skip rows that fail their acceptance checks; noisy
//! recognition degrades to fewer entries, never to errors. All mappers skip
//! the header row except the capital mapper, which scans every row for its
//! currency marker.

use crate::bizfile::grid::Grid;
use crate::bizfile::record::{CapitalEntry, Charge, Officer, Shareholder};

/// Reads a column, treating anything past the row's width as empty.
fn column(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Parses a share count: strips thousands-separator commas, then reads the
/// leading digit run. Unparseable input counts as zero, so `"1,250"` is
/// 1250, `"1250 SHARES"` is 1250 and `"abc"` is 0.
fn parse_share_count(cell: &str) -> u64 {
    let stripped = cell.replace(',', "");
    let digits: String = stripped
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Maps officer rows. A data row needs at least four columns and a
/// non-empty name cell; a missing designation falls back to `DIRECTOR`.
pub fn map_officers(grid: &Grid) -> Vec<Officer> {
    grid.rows()
        .iter()
        .skip(1)
        .filter_map(|row| {
            if row.len() < 4 || row[0].is_empty() {
                return None;
            }
            let designation = column(row, 4);
            Some(Officer {
                name: row[0].clone(),
                id_number: column(row, 1).to_string(),
                address: column(row, 2).to_string(),
                designation: if designation.is_empty() {
                    "DIRECTOR".to_string()
                } else {
                    designation.to_string()
                },
                nationality: column(row, 3).to_string(),
                appointment_date: column(row, 5).to_string(),
            })
        })
        .collect()
}

/// Maps shareholder rows. A data row is recognized by a share-count cell
/// containing at least one digit.
pub fn map_shareholders(grid: &Grid) -> Vec<Shareholder> {
    grid.rows()
        .iter()
        .skip(1)
        .filter_map(|row| {
            if row.len() < 3 || !column(row, 2).chars().any(|c| c.is_ascii_digit()) {
                return None;
            }
            Some(Shareholder {
                name: column(row, 0).to_string(),
                id_number: column(row, 1).to_string(),
                shares_count: parse_share_count(column(row, 2)),
                address: column(row, 3).to_string(),
            })
        })
        .collect()
}

/// Maps charge rows, dropping placeholder rows whose charge number is
/// `NIL` or empty.
pub fn map_charges(grid: &Grid) -> Vec<Charge> {
    grid.rows()
        .iter()
        .skip(1)
        .filter_map(|row| {
            if row.len() < 3 || row[0].is_empty() || row[0] == "NIL" {
                return None;
            }
            Some(Charge {
                charge_number: row[0].clone(),
                date_registered: column(row, 1).to_string(),
                currency: column(row, 2).to_string(),
                amount: column(row, 3).to_string(),
            })
        })
        .collect()
}

/// Maps capital rows. Capital tables carry no reliable header, so every
/// row is scanned and the Singapore-dollar marker identifies data rows.
pub fn map_capital(grid: &Grid) -> Vec<CapitalEntry> {
    grid.rows()
        .iter()
        .filter(|row| row.iter().any(|cell| cell.contains("SINGAPORE DOLLAR")))
        .map(|row| CapitalEntry {
            amount: column(row, 0).to_string(),
            shares: column(row, 1).to_string(),
            currency: "SGD".to_string(),
            capital_type: "ORDINARY".to_string(),
        })
        .collect()
}
