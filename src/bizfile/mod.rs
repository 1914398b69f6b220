//! The BizFile extraction pipeline.
//!
//! Turns a recognized document (free text plus sparse table grids) into a
//! [`CompanyRecord`]: scalar profile fields pulled out by labeled-field
//! patterns, and officer, shareholder, capital and charge rows pulled from
//! tables routed by signature classification.

pub mod assemble;
pub mod classify;
pub mod fields;
pub mod grid;
pub mod record;
pub mod rows;
pub mod text;

pub use assemble::{apply_table, assemble};
pub use classify::{classify, TableCategory};
pub use fields::{extract_fields, CompanyField};
pub use grid::Grid;
pub use record::{CapitalEntry, Charge, CompanyRecord, Officer, Shareholder};
pub use text::normalize;
