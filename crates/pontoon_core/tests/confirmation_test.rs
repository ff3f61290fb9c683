//! Tests for wire-confirmation document assembly.

use pontoon_core::{Customer, Transfer, WireConfirmation};
use serde_json::json;

fn settled_transfer() -> Transfer {
    serde_json::from_value(json!({
        "id": "transfer_42",
        "client_reference_id": "ref-2025-001",
        "state": "payment_processed",
        "on_behalf_of": "cust_7",
        "amount": "15000",
        "currency": "usd",
        "created_at": "2025-02-14T09:30:00Z",
        "source": {
            "payment_rail": "wire",
            "imad": "20250214MMQFMP31000001",
            "omad": "20250214FTB1000002"
        },
        "source_deposit_instructions": {
            "bank_account_number": "000123456789",
            "bank_routing_number": "021000021",
            "bank_name": "First Federal",
            "bank_address": "1 Bank Plaza, New York, NY"
        }
    }))
    .unwrap()
}

fn beneficiary() -> Customer {
    serde_json::from_value(json!({
        "id": "cust_7",
        "first_name": "Jane",
        "last_name": "Doe",
        "address": {
            "street_line_1": "1 Main St",
            "city": "Miami",
            "state": "FL",
            "country": "USA"
        }
    }))
    .unwrap()
}

#[test]
fn document_carries_the_fixed_layout() {
    let document = WireConfirmation::from_transfer(&settled_transfer(), &beneficiary());

    assert_eq!(document.title, "Domestic Wire Transfer");
    assert_eq!(document.left.len(), 6);
    assert_eq!(document.right.len(), 6);

    let titles: Vec<&str> = document
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Beneficiary", "Beneficiary Institution", "Receiving Institution"]
    );
}

#[test]
fn summary_rows_format_amount_date_and_status() {
    let document = WireConfirmation::from_transfer(&settled_transfer(), &beneficiary());

    let value_of = |label: &str| {
        document
            .left
            .iter()
            .chain(&document.right)
            .find(|row| row.label == label)
            .map(|row| row.value.clone())
            .unwrap()
    };

    assert_eq!(value_of("Wire Number:"), "transfer_42");
    assert_eq!(value_of("Amount:"), "$15,000.00");
    assert_eq!(value_of("FED Acceptance Date:"), "Feb 14, 2025");
    assert_eq!(value_of("Account Type:"), "WIRE");
    assert_eq!(value_of("Status:"), "Payment_processed");
    assert_eq!(value_of("IMAD:"), "20250214MMQFMP31000001");
}

#[test]
fn beneficiary_section_reads_customer_and_instructions() {
    let document = WireConfirmation::from_transfer(&settled_transfer(), &beneficiary());

    let beneficiary_rows = &document.sections[0].rows;
    assert_eq!(beneficiary_rows[0].value, "Account Number");
    assert_eq!(beneficiary_rows[1].value, "000123456789");
    assert_eq!(beneficiary_rows[2].value, "Jane Doe");
    assert_eq!(beneficiary_rows[3].value, "1 Main St, Miami, FL, USA");

    let institution_rows = &document.sections[1].rows;
    assert_eq!(institution_rows[0].value, "Fed Routing Number");
    assert_eq!(institution_rows[1].value, "021000021");
    assert_eq!(institution_rows[2].value, "First Federal");

    let receiving_rows = &document.sections[2].rows;
    assert_eq!(receiving_rows[0].value, "021000021");
    assert_eq!(receiving_rows[1].value, "First Federal");
}

#[test]
fn missing_upstream_fields_render_as_empty_or_placeholder() {
    let bare: Transfer = serde_json::from_value(json!({ "id": "transfer_1" })).unwrap();
    let anonymous: Customer = serde_json::from_value(json!({ "id": "cust_1" })).unwrap();
    let document = WireConfirmation::from_transfer(&bare, &anonymous);

    let address_row = document.sections[0]
        .rows
        .iter()
        .find(|row| row.label == "Address:")
        .unwrap();
    assert_eq!(address_row.value, "-");

    // Unformattable values pass through raw rather than crashing.
    assert!(document.to_string().contains("Domestic Wire Transfer"));
}

#[test]
fn text_preview_renders_every_section() {
    let rendered = WireConfirmation::from_transfer(&settled_transfer(), &beneficiary())
        .to_string();
    for needle in [
        "Domestic Wire Transfer",
        "Beneficiary",
        "Beneficiary Institution",
        "Receiving Institution",
        "$15,000.00",
    ] {
        assert!(rendered.contains(needle), "missing {needle}");
    }
}
