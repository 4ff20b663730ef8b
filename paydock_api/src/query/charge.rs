use chrono::{DateTime, SecondsFormat, Utc};

use super::common::{PairBuilder, Query};

/// Filters for `GET charges`. Every field is optional; unset fields are not sent.
#[derive(Clone, Debug, Default)]
pub struct ChargeSearchRequest {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub subscription_id: Option<String>,
    pub gateway_id: Option<String>,
    pub company_id: Option<String>,
    pub created_at_from: Option<DateTime<Utc>>,
    pub created_at_to: Option<DateTime<Utc>>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub archived: Option<bool>,
    pub reference: Option<String>,
    /// Former name of `reference`, still accepted. Used only when `reference` is unset.
    pub transaction_external_id: Option<String>,
}

impl ChargeSearchRequest {
    /// `reference`, falling back to the legacy `transaction_external_id`.
    pub fn effective_reference(&self) -> Option<&str> {
        match self.reference.as_deref() {
            Some(reference) if !reference.is_empty() => Some(reference),
            _ => self.transaction_external_id.as_deref(),
        }
    }

    pub fn with_skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn with_subscription_id(mut self, subscription_id: &str) -> Self {
        self.subscription_id = Some(subscription_id.to_string());
        self
    }
    pub fn with_gateway_id(mut self, gateway_id: &str) -> Self {
        self.gateway_id = Some(gateway_id.to_string());
        self
    }
    pub fn with_company_id(mut self, company_id: &str) -> Self {
        self.company_id = Some(company_id.to_string());
        self
    }
    pub fn with_created_at_from(mut self, from: DateTime<Utc>) -> Self {
        self.created_at_from = Some(from);
        self
    }
    pub fn with_created_at_to(mut self, to: DateTime<Utc>) -> Self {
        self.created_at_to = Some(to);
        self
    }
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }
    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }
    pub fn with_transaction_external_id(mut self, transaction_external_id: &str) -> Self {
        self.transaction_external_id = Some(transaction_external_id.to_string());
        self
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Query for ChargeSearchRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        PairBuilder::default()
            .display("skip", self.skip)
            .display("limit", self.limit)
            .text("subscription_id", self.subscription_id.as_deref())
            .text("gateway_id", self.gateway_id.as_deref())
            .text("company_id", self.company_id.as_deref())
            .display("created_at.from", self.created_at_from.as_ref().map(format_timestamp))
            .display("created_at.to", self.created_at_to.as_ref().map(format_timestamp))
            .text("search", self.search.as_deref())
            .text("status", self.status.as_deref())
            .display("archived", self.archived)
            .text("reference", self.effective_reference())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use url::Url;

    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/v1/charges").unwrap()
    }

    #[test]
    fn test_charge_search_query() {
        insta::assert_snapshot!(ChargeSearchRequest::default().add_to_url(&base()).to_string(), @"https://example.com/v1/charges");

        insta::assert_snapshot!(ChargeSearchRequest::default()
            .with_status("complete")
            .with_limit(10)
            .add_to_url(&base())
            .to_string(), @"https://example.com/v1/charges?limit=10&status=complete");

        insta::assert_snapshot!(ChargeSearchRequest::default()
            .with_archived(true)
            .with_created_at_from(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
            .with_skip(20)
            .add_to_url(&base())
            .to_string(), @"https://example.com/v1/charges?skip=20&created_at.from=2024-01-02T03%3A04%3A05Z&archived=true");
    }

    #[test]
    fn legacy_transaction_id_fills_missing_reference() {
        let request = ChargeSearchRequest::default().with_transaction_external_id("abc123");
        assert_eq!(request.effective_reference(), Some("abc123"));

        let empty_reference = ChargeSearchRequest {
            reference: Some(String::new()),
            transaction_external_id: Some("abc123".to_string()),
            ..Default::default()
        };
        assert_eq!(empty_reference.effective_reference(), Some("abc123"));
    }

    #[test]
    fn explicit_reference_wins_over_legacy_field() {
        let request = ChargeSearchRequest::default()
            .with_reference("new")
            .with_transaction_external_id("old");
        let pairs = request.query_pairs();
        assert_eq!(pairs, vec![("reference", "new".to_string())]);
    }
}
