//! CLI mode for one-shot BizFile extraction.

use crate::api;
use crate::config::AzureConfig;
use bizfile_ocr::azure::AnalyzeOutcome;
use bizfile_ocr::{assemble, CompanyRecord};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Process a document fetched from a URL
pub async fn process_url(
    url: &str,
    config: &AzureConfig,
    output_format: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let start = Instant::now();

    info!("Downloading document...");
    let document = download_bytes(url).await?;
    info!(
        "Downloaded {} bytes in {:.2}ms",
        document.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    run_extraction(&document, config, output_format).await
}

/// Process a local document file
pub async fn process_file(
    path: &Path,
    config: &AzureConfig,
    output_format: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let document = tokio::fs::read(path).await?;
    info!("Read {} bytes from {}", document.len(), path.display());

    run_extraction(&document, config, output_format).await
}

/// Analyze the document and print the assembled record
async fn run_extraction(
    document: &[u8],
    config: &AzureConfig,
    output_format: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = api::build_client(config)?;

    info!("Submitting document for layout analysis...");
    let start = Instant::now();
    let outcome = client.analyze(document).await?;
    info!("Analysis completed in {:.2}s", start.elapsed().as_secs_f64());

    let record = assemble(&outcome.result);
    output_result(&record, &outcome, output_format)?;

    Ok(())
}

/// Download document bytes from a URL
async fn download_bytes(url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(format!("HTTP error fetching document: {}", response.status()).into());
    }
    Ok(response.bytes().await?.to_vec())
}

/// Output the extraction result in the requested format
fn output_result(
    record: &CompanyRecord,
    outcome: &AnalyzeOutcome,
    format: &str,
) -> Result<(), serde_json::Error> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string(record)?);
        }
        "text" => {
            println!("{}", outcome.result.content);
        }
        "pretty" | _ => {
            println!("\n=== BizFile Extraction ===");
            println!("Company: {}", display_or_dash(&record.company_name));
            println!("UEN: {}", display_or_dash(&record.uen));
            println!("Incorporated: {}", display_or_dash(&record.incorporation_date));
            println!("Type: {}", display_or_dash(&record.company_type));
            println!("FYE: {}", display_or_dash(&record.financial_year_end));
            println!("Address: {}", display_or_dash(&record.registered_address));
            println!(
                "Primary activity: {}",
                display_or_dash(&record.business_activity_primary)
            );
            println!(
                "Secondary activity: {}",
                display_or_dash(&record.business_activity_secondary)
            );
            println!();

            println!("--- Officers ({}) ---", record.officers.len());
            for officer in &record.officers {
                println!(
                    "  {} [{}] {} appointed {}",
                    officer.name,
                    officer.id_number,
                    officer.designation,
                    display_or_dash(&officer.appointment_date)
                );
            }

            println!("--- Shareholders ({}) ---", record.shareholders.len());
            for shareholder in &record.shareholders {
                println!(
                    "  {} [{}] {} shares",
                    shareholder.name, shareholder.id_number, shareholder.shares_count
                );
            }

            println!(
                "--- Issued share capital ({}) ---",
                record.issued_share_capital.len()
            );
            for entry in &record.issued_share_capital {
                println!("  {} {} for {} shares", entry.currency, entry.amount, entry.shares);
            }

            println!("--- Paid-up capital ({}) ---", record.paid_up_capital.len());
            for entry in &record.paid_up_capital {
                println!("  {} {} for {} shares", entry.currency, entry.amount, entry.shares);
            }

            println!("--- Charges ({}) ---", record.charges.len());
            for charge in &record.charges {
                println!(
                    "  #{} registered {} ({} {})",
                    charge.charge_number, charge.date_registered, charge.currency, charge.amount
                );
            }
        }
    }

    Ok(())
}

/// Placeholder for empty scalar fields in pretty output
fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
