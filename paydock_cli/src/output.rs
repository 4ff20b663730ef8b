use anyhow::Result;
use paydock_api::types::{Charge, Customer};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ChargeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Reference")]
    reference: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Reference")]
    reference: String,
    #[tabled(rename = "Sources")]
    sources: usize,
    #[tabled(rename = "Archived")]
    archived: bool,
}

fn build_charge_rows(charges: &[Charge]) -> Vec<ChargeRow> {
    charges
        .iter()
        .map(|c| ChargeRow {
            id: c.id.clone(),
            amount: format!("{} {}", c.amount, c.currency),
            status: c.status.clone().unwrap_or_default(),
            reference: c.reference.clone().unwrap_or_default(),
            customer: c
                .customer
                .as_ref()
                .map(|cu| join_name(cu.first_name.as_deref(), cu.last_name.as_deref()))
                .unwrap_or_default(),
            created_at: c.created_at.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_customer_rows(customers: &[Customer]) -> Vec<CustomerRow> {
    customers
        .iter()
        .map(|c| CustomerRow {
            id: c.id.clone(),
            name: join_name(c.first_name.as_deref(), c.last_name.as_deref()),
            email: c.email.clone().unwrap_or_default(),
            reference: c.reference.clone().unwrap_or_default(),
            sources: c.payment_sources.len(),
            archived: c.archived,
        })
        .collect()
}

fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_charges_table(charges: &[Charge]) {
    let mut table = Table::new(build_charge_rows(charges));
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn print_customers_table(customers: &[Customer]) {
    let mut table = Table::new(build_customer_rows(customers));
    table.with(Style::rounded());
    println!("{}", table);
}

/// Pretty-prints the body the API returned, including fields the SDK does not model.
pub fn print_raw_json(raw: &str) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Reports an upstream failure on stderr, with the server's payload when it sent one.
pub fn print_api_error(err: &paydock_api::Error) {
    match err {
        paydock_api::Error::Response { status, error } => {
            eprintln!("Paydock rejected the request (HTTP {})", status);
            match serde_json::to_string_pretty(error) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("{}", error.json_response),
            }
        }
        paydock_api::Error::ErrorPayload { status, body, .. } => {
            eprintln!("Paydock returned HTTP {} with an unexpected body:", status);
            eprintln!("{}", body);
        }
        paydock_api::Error::Encoding { status, source } => {
            eprintln!(
                "Paydock returned HTTP {} with a body that is not UTF-8 ({} bytes)",
                status,
                source.as_bytes().len()
            );
        }
        paydock_api::Error::Timeout { .. } => {
            eprintln!("No response from Paydock; check connectivity or raise PAYDOCK_TIMEOUT_MS");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(json: serde_json::Value) -> Charge {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn charge_rows_fill_missing_fields_with_blanks() {
        let rows = build_charge_rows(&[charge(serde_json::json!({
            "_id": "c1",
            "amount": 12.5,
            "currency": "AUD",
            "customer": {"first_name": "Jane"}
        }))]);
        assert_eq!(rows[0].amount, "12.5 AUD");
        assert_eq!(rows[0].status, "");
        assert_eq!(rows[0].customer, "Jane");
    }

    #[test]
    fn join_name_skips_missing_parts() {
        assert_eq!(join_name(Some("Jane"), Some("Citizen")), "Jane Citizen");
        assert_eq!(join_name(None, Some("Citizen")), "Citizen");
        assert_eq!(join_name(None, None), "");
    }

    #[test]
    fn raw_json_must_be_valid() {
        assert!(print_raw_json("{\"a\":1}").is_ok());
        assert!(print_raw_json("nope").is_err());
    }
}
