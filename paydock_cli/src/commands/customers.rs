use anyhow::Result;
use clap::{Args, Subcommand};
use paydock_api::types::Customer;
use paydock_api::{Client, CustomerSearchRequest, SortDirection};

use crate::output::{print_customers_table, print_raw_json, OutputFormat};

#[derive(Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub action: CustomerAction,
}

#[derive(Subcommand)]
pub enum CustomerAction {
    /// List customers
    List,
    /// Get a single customer by ID
    Get { id: String },
    /// Search customers by filter
    Search(SearchArgs),
    /// Archive a customer
    Archive { id: String },
}

#[derive(Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub skip: Option<i64>,

    #[arg(long)]
    pub limit: Option<i64>,

    /// Free-text search over name and email
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by merchant reference
    #[arg(long)]
    pub reference: Option<String>,

    /// Filter by payment source ID
    #[arg(long)]
    pub payment_source_id: Option<String>,

    /// Filter by gateway ID
    #[arg(long)]
    pub gateway_id: Option<String>,

    /// Field to sort on (e.g. created_at)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc", value_parser = parse_sort_direction)]
    pub sort_direction: SortDirection,

    /// Include archived customers
    #[arg(long)]
    pub archived: bool,
}

fn parse_sort_direction(s: &str) -> Result<SortDirection, String> {
    s.parse()
        .map_err(|_| format!("unknown sort direction '{}' (expected asc or desc)", s))
}

fn build_search(args: &SearchArgs) -> CustomerSearchRequest {
    let mut search = CustomerSearchRequest {
        skip: args.skip,
        limit: args.limit,
        search: args.search.clone(),
        reference: args.reference.clone(),
        payment_source_id: args.payment_source_id.clone(),
        gateway_id: args.gateway_id.clone(),
        ..Default::default()
    };
    if let Some(sort_by) = &args.sort_by {
        search = search.with_sort(sort_by, args.sort_direction);
    }
    if args.archived {
        search = search.with_archived(true);
    }
    search
}

pub async fn run(
    args: &CustomersArgs,
    client: &Client,
    secret_key: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let mut customers = client.customers();
    if let Some(key) = secret_key {
        customers = customers.with_secret_key(key);
    }

    let resp = match &args.action {
        CustomerAction::List => {
            let resp = customers.list().await?;
            return print_list(&resp.resource.data, &resp.json_response, format);
        }
        CustomerAction::Search(search_args) => {
            let resp = customers.search(&build_search(search_args)).await?;
            return print_list(&resp.resource.data, &resp.json_response, format);
        }
        CustomerAction::Get { id } => customers.get(id).await?,
        CustomerAction::Archive { id } => customers.archive(id).await?,
    };

    print_list(std::slice::from_ref(&resp.resource.data), &resp.json_response, format)
}

fn print_list(data: &[Customer], raw: &str, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_customers_table(data),
        OutputFormat::Json => print_raw_json(raw)?,
    }
    Ok(())
}
