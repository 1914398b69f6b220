//! End-to-end extraction tests over service-shaped payloads.
//!
//! Each test decodes a JSON body with the shape the layout service returns
//! inside `analyzeResult`, runs the assembly pipeline, and checks the
//! structured record. No network access involved.

use bizfile_ocr::{assemble, AnalyzeResult};
use serde_json::{json, Value};

/// Builds a service-shaped table from `(rowIndex, columnIndex, content)`
/// triples.
fn layout_table(cells: &[(usize, usize, &str)]) -> Value {
    json!({
        "cells": cells
            .iter()
            .map(|(row, column, content)| {
                json!({
                    "rowIndex": row,
                    "columnIndex": column,
                    "content": content,
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// Builds a table from dense rows, numbering cells left to right.
fn dense_table(rows: &[&[&str]]) -> Value {
    let cells: Vec<(usize, usize, &str)> = rows
        .iter()
        .enumerate()
        .flat_map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(move |(column_index, content)| (row_index, column_index, *content))
        })
        .collect();
    layout_table(&cells)
}

fn decode(payload: Value) -> AnalyzeResult {
    serde_json::from_value(payload).expect("payload should decode")
}

#[test]
fn extracts_a_full_company_record() {
    let payload = json!({
        "apiVersion": "2023-07-31",
        "modelId": "prebuilt-layout",
        "content": "Name of Company: ACME HOLDINGS PTE. LTD.\n\
            Former Name if any: ACME PRIVATE LIMITED\n\
            UEN: 201912345A\n\
            Incorporation Date: 05/03/2019\n\
            Company Type Private Company Limited by Shares :\n\
            Registered Office Address: 1 MARINA BOULEVARD\n#22-01\nSINGAPORE (018989)\n\
            Date of Address: 05/03/2019\n\
            Primary Activity: DEVELOPMENT OF SOFTWARE\n\
            Secondary Activity: IT CONSULTANCY\n\
            Verify Document at www.acra.gov.sg\n\
            FYE As At Date of Last AR: 31/12/2023",
        "tables": [
            dense_table(&[
                &["Name", "ID", "Address", "Nationality", "Designation", "Date of Appointment"],
                &["JOHN TAN", "S1234567A", "10 STREET ROAD SINGAPORE", "SINGAPOREAN", "DIRECTOR", "05/03/2019"],
                &["MARY WONG", "S2345678B", "11 HILL LANE SINGAPORE", "SINGAPOREAN", "SECRETARY", "06/03/2019"],
            ]),
            dense_table(&[
                &["Shareholder Name", "ID", "Number of Shares", "Address"],
                &["JANE LIM", "S7654321B", "10,000", "2 ORCHARD ROAD SINGAPORE"],
                &["ACME CAPITAL PTE LTD", "201800001Z", "90,000", "3 RAFFLES PLACE SINGAPORE"],
            ]),
            dense_table(&[
                &["Issued Share Capital"],
                &["Amount", "Number of Shares", "Currency", "Share Type"],
                &["100,000", "100,000", "SINGAPORE DOLLARS", "ORDINARY"],
            ]),
            dense_table(&[
                &["Paid-Up Share Capital"],
                &["Amount", "Number of Shares", "Currency", "Share Type"],
                &["80,000", "80,000", "SINGAPORE DOLLARS", "ORDINARY"],
            ]),
            dense_table(&[
                &["Charge Number", "Date Registered", "Currency", "Amount Secured"],
                &["1001", "10/06/2021", "SGD", "250,000"],
            ]),
        ],
    });

    let record = assemble(&decode(payload));

    assert_eq!(record.company_name, "ACME HOLDINGS PTE. LTD.");
    assert_eq!(record.uen, "201912345A");
    assert_eq!(record.incorporation_date, "05/03/2019");
    assert_eq!(record.company_type, "Private Company Limited by Shares");
    assert_eq!(record.financial_year_end, "31/12/2023");
    assert_eq!(
        record.registered_address,
        "1 MARINA BOULEVARD #22-01 SINGAPORE (018989)"
    );
    assert_eq!(record.business_activity_primary, "DEVELOPMENT OF SOFTWARE");
    assert_eq!(record.business_activity_secondary, "IT CONSULTANCY");

    assert_eq!(record.officers.len(), 2);
    assert_eq!(record.officers[0].name, "JOHN TAN");
    assert_eq!(record.officers[1].designation, "SECRETARY");

    assert_eq!(record.shareholders.len(), 2);
    assert_eq!(record.shareholders[0].shares_count, 10_000);
    assert_eq!(record.shareholders[1].name, "ACME CAPITAL PTE LTD");

    assert_eq!(record.issued_share_capital.len(), 1);
    assert_eq!(record.issued_share_capital[0].amount, "100,000");
    assert_eq!(record.issued_share_capital[0].currency, "SGD");
    assert_eq!(record.issued_share_capital[0].capital_type, "ORDINARY");

    assert_eq!(record.paid_up_capital.len(), 1);
    assert_eq!(record.paid_up_capital[0].amount, "80,000");

    assert_eq!(record.charges.len(), 1);
    assert_eq!(record.charges[0].charge_number, "1001");
}

#[test]
fn sparse_cells_fill_missing_positions_with_defaults() {
    // Officer row 1 carries no designation or appointment cells; officer
    // row 2 is entirely absent from the cell list.
    let payload = json!({
        "content": "",
        "tables": [layout_table(&[
            (0, 0, "Name"),
            (0, 1, "ID"),
            (0, 2, "Address"),
            (0, 3, "Nationality"),
            (0, 4, "Designation"),
            (1, 0, "JOHN TAN"),
            (1, 1, "S1234567A"),
            (1, 2, "1 STREET ROAD"),
            (1, 3, "SINGAPOREAN"),
            (3, 0, "LEE WEI"),
            (3, 1, "S9998887C"),
            (3, 2, "9 RIVER WALK"),
            (3, 3, "SINGAPOREAN"),
            (3, 4, "SECRETARY"),
        ])],
    });

    let record = assemble(&decode(payload));

    assert_eq!(record.officers.len(), 2);
    assert_eq!(record.officers[0].name, "JOHN TAN");
    assert_eq!(record.officers[0].designation, "DIRECTOR");
    assert_eq!(record.officers[0].appointment_date, "");
    assert_eq!(record.officers[1].name, "LEE WEI");
    assert_eq!(record.officers[1].designation, "SECRETARY");
}

#[test]
fn cell_text_is_normalized_before_mapping() {
    let payload = json!({
        "content": "",
        "tables": [layout_table(&[
            (0, 0, "Shareholder Name"),
            (0, 1, "ID"),
            (0, 2, "Shares"),
            (0, 3, "Address"),
            (1, 0, "JANE\nLIM"),
            (1, 1, " S7654321B "),
            (1, 2, "10,000"),
            (1, 3, "2 ORCHARD\nROAD   SINGAPORE"),
        ])],
    });

    let record = assemble(&decode(payload));

    assert_eq!(record.shareholders.len(), 1);
    assert_eq!(record.shareholders[0].name, "JANE LIM");
    assert_eq!(record.shareholders[0].id_number, "S7654321B");
    assert_eq!(record.shareholders[0].address, "2 ORCHARD ROAD SINGAPORE");
}

#[test]
fn one_table_can_land_in_several_record_sections() {
    let payload = json!({
        "content": "",
        "tables": [dense_table(&[
            &["Shareholder", "Charge Number", "Shares", "Address"],
            &["JANE LIM", "S7654321B", "5,000", "3 RIVER ROAD"],
        ])],
    });

    let record = assemble(&decode(payload));

    assert_eq!(record.shareholders.len(), 1);
    assert_eq!(record.shareholders[0].shares_count, 5_000);
    assert_eq!(record.charges.len(), 1);
    assert_eq!(record.charges[0].charge_number, "JANE LIM");
}

#[test]
fn nil_charge_placeholders_produce_no_entries() {
    let payload = json!({
        "content": "",
        "tables": [dense_table(&[
            &["Charge Number", "Date Registered", "Currency", "Amount Secured"],
            &["NIL", "", "", ""],
        ])],
    });

    let record = assemble(&decode(payload));
    assert!(record.charges.is_empty());
}

#[test]
fn missing_labels_and_unmatched_tables_leave_defaults() {
    let payload = json!({
        "content": "An unrelated cover page with no profile labels",
        "tables": [dense_table(&[
            &["Some", "Other", "Table"],
            &["with", "plain", "cells"],
        ])],
    });

    let record = assemble(&decode(payload));

    assert_eq!(record.company_name, "");
    assert_eq!(record.uen, "");
    assert!(record.officers.is_empty());
    assert!(record.shareholders.is_empty());
    assert!(record.issued_share_capital.is_empty());
    assert!(record.paid_up_capital.is_empty());
    assert!(record.charges.is_empty());
}

#[test]
fn record_serializes_with_the_documented_field_names() {
    let payload = json!({
        "content": "UEN: 201912345A",
        "tables": [dense_table(&[
            &["Paid-Up Capital (Ordinary)"],
            &["50,000", "50,000", "SINGAPORE DOLLARS"],
        ])],
    });

    let record = assemble(&decode(payload));
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["uen"], "201912345A");
    assert_eq!(value["paid_up_capital"][0]["type"], "ORDINARY");
    assert_eq!(value["paid_up_capital"][0]["currency"], "SGD");
    assert_eq!(value["issued_share_capital"], json!([]));
    assert!(value.get("capital_type").is_none());
}
