//! Wire-transfer confirmation document model.
//!
//! Assembles the data a confirmation document carries: a two-column summary
//! block and three labeled sections. Rendering to PDF is the job of an
//! external layout engine consuming this model; the `Display` impl gives the
//! CLI a plain-text preview of the same content.

use crate::customer::Customer;
use crate::transfer::Transfer;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// One label/value row in a section or summary column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRow {
    /// Row label, including the trailing colon
    pub label: String,
    /// Row value; empty when the upstream field was absent
    pub value: String,
}

impl LabeledRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// A titled block of label/value rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Rows in layout order
    pub rows: Vec<LabeledRow>,
}

/// The single-page landscape confirmation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConfirmation {
    /// Document title
    pub title: String,
    /// Left summary column
    pub left: Vec<LabeledRow>,
    /// Right summary column
    pub right: Vec<LabeledRow>,
    /// Beneficiary, Beneficiary Institution, Receiving Institution
    pub sections: Vec<Section>,
}

impl WireConfirmation {
    /// Assemble the document from a transfer and its customer.
    pub fn from_transfer(transfer: &Transfer, customer: &Customer) -> Self {
        let amount = format_money(
            transfer.amount.as_deref().unwrap_or_default(),
            transfer.currency.as_deref().unwrap_or("USD"),
        );
        let created_at = format_date(transfer.created_at.as_deref().unwrap_or_default());
        let status = capitalize(transfer.state.as_deref().unwrap_or_default());

        let source = transfer.source.clone().unwrap_or_default();
        let instructions = transfer.source_deposit_instructions.clone().unwrap_or_default();

        let left = vec![
            LabeledRow::new("Wire Number:", transfer.id.clone()),
            LabeledRow::new(
                "Reference Number:",
                transfer.client_reference_id.clone().unwrap_or_default(),
            ),
            LabeledRow::new("FED Acceptance Date:", created_at.clone()),
            LabeledRow::new("FED Acceptance Time:", ""),
            LabeledRow::new("Effective Date:", created_at.clone()),
            LabeledRow::new("Amount:", amount),
        ];

        let right = vec![
            LabeledRow::new("IMAD:", source.imad.unwrap_or_default()),
            LabeledRow::new("OMAD:", source.omad.unwrap_or_default()),
            LabeledRow::new("Upload Date:", created_at),
            LabeledRow::new(
                "From Account:",
                transfer.on_behalf_of.clone().unwrap_or_default(),
            ),
            LabeledRow::new(
                "Account Type:",
                source
                    .payment_rail
                    .map(|rail| rail.to_uppercase())
                    .unwrap_or_default(),
            ),
            LabeledRow::new("Status:", status),
        ];

        let beneficiary_address = customer
            .address
            .as_ref()
            .map(|address| address.formatted())
            .filter(|formatted| !formatted.is_empty())
            .unwrap_or_else(|| "-".to_string());

        let sections = vec![
            Section {
                title: "Beneficiary".to_string(),
                rows: vec![
                    LabeledRow::new("Identification Type:", "Account Number"),
                    LabeledRow::new(
                        "Identification Number:",
                        instructions.bank_account_number.clone().unwrap_or_default(),
                    ),
                    LabeledRow::new("Name:", customer.full_name()),
                    LabeledRow::new("Address:", beneficiary_address),
                ],
            },
            Section {
                title: "Beneficiary Institution".to_string(),
                rows: vec![
                    LabeledRow::new("Identification Type:", "Fed Routing Number"),
                    LabeledRow::new(
                        "Identification Number:",
                        instructions.bank_routing_number.clone().unwrap_or_default(),
                    ),
                    LabeledRow::new("Name:", instructions.bank_name.clone().unwrap_or_default()),
                    LabeledRow::new(
                        "Address:",
                        instructions.bank_address.clone().unwrap_or_default(),
                    ),
                ],
            },
            Section {
                title: "Receiving Institution".to_string(),
                rows: vec![
                    LabeledRow::new(
                        "Routing/Transit Number:",
                        instructions.bank_routing_number.unwrap_or_default(),
                    ),
                    LabeledRow::new(
                        "Institution Name:",
                        instructions.bank_name.unwrap_or_default(),
                    ),
                ],
            },
        ];

        Self {
            title: "Domestic Wire Transfer".to_string(),
            left,
            right,
            sections,
        }
    }
}

impl std::fmt::Display for WireConfirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{:-<40}", "")?;
        for row in self.left.iter().chain(&self.right) {
            writeln!(f, "{:<24} {}", row.label, row.value)?;
        }
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.title)?;
            writeln!(f, "{:-<40}", "")?;
            for row in &section.rows {
                writeln!(f, "{:<24} {}", row.label, row.value)?;
            }
        }
        Ok(())
    }
}

/// Format a monetary amount: `$1,234.56` for USD, `1,234.56 EUR` otherwise.
///
/// An amount that does not parse as a number passes through raw.
pub fn format_money(amount: &str, currency: &str) -> String {
    match amount.parse::<f64>() {
        Ok(value) => {
            let grouped = group_thousands(value);
            if currency.eq_ignore_ascii_case("usd") {
                format!("${grouped}")
            } else {
                format!("{grouped} {currency}")
            }
        }
        Err(_) => amount.to_string(),
    }
}

/// Format an RFC 3339 timestamp as `Feb 14, 2025`; unparseable input passes
/// through raw.
pub fn format_date(iso: &str) -> String {
    let canonical = if let Some(stripped) = iso.strip_suffix('Z') {
        format!("{stripped}+00:00")
    } else {
        iso.to_string()
    };
    match DateTime::parse_from_rfc3339(&canonical) {
        Ok(parsed) => parsed.format("%b %d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integral, fraction) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let mut grouped = String::new();
    let digits: Vec<char> = integral.chars().collect();
    for (offset, digit) in digits.iter().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_with_grouping() {
        assert_eq!(format_money("1234.5", "usd"), "$1,234.50");
        assert_eq!(format_money("1234567.891", "EUR"), "1,234,567.89 EUR");
        assert_eq!(format_money("12", "usd"), "$12.00");
    }

    #[test]
    fn unparseable_money_passes_through() {
        assert_eq!(format_money("n/a", "usd"), "n/a");
    }

    #[test]
    fn dates_format_readably() {
        assert_eq!(format_date("2025-02-14T09:30:00Z"), "Feb 14, 2025");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }
}
