//! Structured extraction of ACRA BizFile company records.
//!
//! An uploaded BizFile PDF is sent to the Azure Document Intelligence
//! layout service; the recognized text and table grids come back as an
//! [`AnalyzeResult`], and [`assemble`] transforms that into a
//! [`CompanyRecord`] holding the profile fields, officers, shareholders,
//! capital entries, and registered charges.
//!
//! # Main APIs
//!
//! - [`AzureClient`]: submit a document and await its layout analysis
//! - [`assemble`]: turn an analysis result into a [`CompanyRecord`]
//!
//! ```rust,no_run
//! use bizfile_ocr::{assemble, AzureClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AzureClient::new("https://myresource.cognitiveservices.azure.com", "key")?;
//! let document = std::fs::read("bizfile.pdf")?;
//! let outcome = client.analyze(&document).await?;
//! let record = assemble(&outcome.result);
//! println!("{}", record.company_name);
//! # Ok(())
//! # }
//! ```

pub mod azure;
pub mod bizfile;
pub mod core;
pub mod utils;

pub use azure::{AnalyzeOutcome, AnalyzeResult, AzureClient};
pub use bizfile::{assemble, CompanyRecord};
pub use crate::core::errors::{AnalysisError, AnalysisResult};
