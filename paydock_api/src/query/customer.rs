use super::common::{PairBuilder, Query, SortDirection};

/// Filters for `GET customers`. Unset fields are not sent.
#[derive(Clone, Debug, Default)]
pub struct CustomerSearchRequest {
    pub id: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    /// Field to sort on, e.g. `created_at`.
    pub sort_key: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub gateway_id: Option<String>,
    pub archived: Option<bool>,
    pub reference: Option<String>,
    pub payment_source_id: Option<String>,
}

impl CustomerSearchRequest {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }
    pub fn with_skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
    pub fn with_sort(mut self, sort_key: &str, sort_direction: SortDirection) -> Self {
        self.sort_key = Some(sort_key.to_string());
        self.sort_direction = Some(sort_direction);
        self
    }
    pub fn with_gateway_id(mut self, gateway_id: &str) -> Self {
        self.gateway_id = Some(gateway_id.to_string());
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
    pub fn with_payment_source_id(mut self, payment_source_id: &str) -> Self {
        self.payment_source_id = Some(payment_source_id.to_string());
        self
    }
}

impl Query for CustomerSearchRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        PairBuilder::default()
            .text("id", self.id.as_deref())
            .display("skip", self.skip)
            .display("limit", self.limit)
            .text("search", self.search.as_deref())
            .text("sortkey", self.sort_key.as_deref())
            .display("sortdirection", self.sort_direction)
            .text("gateway_id", self.gateway_id.as_deref())
            .display("archived", self.archived)
            .text("reference", self.reference.as_deref())
            .text("payment_source_id", self.payment_source_id.as_deref())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_customer_search_query() {
        let url = Url::parse("https://example.com/v1/customers").unwrap();

        insta::assert_snapshot!(CustomerSearchRequest::default()
            .with_payment_source_id("ps_1")
            .with_sort("created_at", SortDirection::Asc)
            .with_search("jane doe")
            .with_limit(5)
            .add_to_url(&url)
            .to_string(), @"https://example.com/v1/customers?limit=5&search=jane+doe&sortkey=created_at&sortdirection=ASC&payment_source_id=ps_1");
    }
}
