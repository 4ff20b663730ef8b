use chrono::{TimeZone, Utc};
use paydock_api::{ChargeSearchRequest, CustomerSearchRequest, Query, SortDirection};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/v1/charges").unwrap()
}

#[test]
fn charge_search_defaults_send_nothing() {
    let url = ChargeSearchRequest::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn charge_search_limit_and_status_only() {
    let url = ChargeSearchRequest::default()
        .with_status("complete")
        .with_limit(10)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("limit=10&status=complete"));
}

#[test]
fn charge_search_full_order() {
    let url = ChargeSearchRequest::default()
        .with_reference("ref")
        .with_archived(false)
        .with_status("failed")
        .with_search("jane")
        .with_created_at_to(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        .with_created_at_from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .with_company_id("co")
        .with_gateway_id("gw")
        .with_subscription_id("sub")
        .with_limit(5)
        .with_skip(10)
        .add_to_url(&base_url());
    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(
        keys,
        vec![
            "skip",
            "limit",
            "subscription_id",
            "gateway_id",
            "company_id",
            "created_at.from",
            "created_at.to",
            "search",
            "status",
            "archived",
            "reference",
        ]
    );
    let query = url.query().unwrap();
    assert!(query.contains("archived=false"));
    assert!(query.contains("created_at.to=2024-02-01T00%3A00%3A00Z"));
}

#[test]
fn charge_search_legacy_reference() {
    let url = ChargeSearchRequest::default()
        .with_transaction_external_id("abc123")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("reference=abc123"));
}

#[test]
fn charge_search_escapes_values() {
    let url = ChargeSearchRequest::default()
        .with_search("a b&c")
        .add_to_url(&base_url());
    let decoded: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(decoded, vec![("search".to_string(), "a b&c".to_string())]);
}

#[test]
fn customer_search_order_and_sort() {
    let url = CustomerSearchRequest::default()
        .with_archived(true)
        .with_gateway_id("gw")
        .with_sort("created_at", SortDirection::Desc)
        .with_skip(0)
        .with_id("cus_1")
        .add_to_url(&Url::parse("https://example.com/v1/customers").unwrap());
    assert_eq!(
        url.query(),
        Some("id=cus_1&skip=0&sortkey=created_at&sortdirection=DESC&gateway_id=gw&archived=true")
    );
}
