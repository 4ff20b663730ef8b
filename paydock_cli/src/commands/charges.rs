use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use paydock_api::types::ChargeRequest;
use paydock_api::{ChargeSearchRequest, Client};
use rust_decimal::Decimal;

use crate::output::{print_charges_table, print_raw_json, OutputFormat};

#[derive(Args)]
pub struct ChargesArgs {
    #[command(subcommand)]
    pub action: ChargeAction,
}

#[derive(Subcommand)]
pub enum ChargeAction {
    /// List recent charges
    List,
    /// Get a single charge by ID
    Get { id: String },
    /// Search charges by filter
    Search(SearchArgs),
    /// Create a charge
    Add(AddArgs),
    /// Capture an authorised charge
    Capture {
        id: String,
        /// Partial amount to capture (defaults to the full amount)
        #[arg(long)]
        amount: Option<Decimal>,
    },
    /// Cancel an authorised charge
    Cancel { id: String },
    /// Refund a charge
    Refund {
        id: String,
        /// Partial amount to refund
        #[arg(long)]
        amount: Option<Decimal>,
    },
    /// Archive a charge
    Archive { id: String },
}

#[derive(Args)]
pub struct SearchArgs {
    /// Number of results to skip
    #[arg(long)]
    pub skip: Option<i64>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<i64>,

    /// Filter by status (e.g. complete, failed, refunded)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by merchant reference
    #[arg(long)]
    pub reference: Option<String>,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by gateway ID
    #[arg(long)]
    pub gateway_id: Option<String>,

    /// Filter by subscription ID
    #[arg(long)]
    pub subscription_id: Option<String>,

    /// Only charges created on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only charges created before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Include archived charges
    #[arg(long)]
    pub archived: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Amount to charge
    #[arg(long)]
    pub amount: Decimal,

    /// ISO currency code
    #[arg(long, default_value = "AUD")]
    pub currency: String,

    /// One-time payment token
    #[arg(long)]
    pub token: Option<String>,

    /// Charge an existing customer
    #[arg(long)]
    pub customer_id: Option<String>,

    /// Charge a specific payment source of the customer
    #[arg(long)]
    pub payment_source_id: Option<String>,

    #[arg(long)]
    pub reference: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Authorise only; capture later with `charges capture`
    #[arg(long)]
    pub authorise_only: bool,
}

fn start_of_day(date: NaiveDate) -> Option<chrono::DateTime<chrono::Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

fn build_search(args: &SearchArgs) -> ChargeSearchRequest {
    let mut search = ChargeSearchRequest {
        skip: args.skip,
        limit: args.limit,
        status: args.status.clone(),
        reference: args.reference.clone(),
        search: args.search.clone(),
        gateway_id: args.gateway_id.clone(),
        subscription_id: args.subscription_id.clone(),
        created_at_from: args.from.and_then(start_of_day),
        created_at_to: args.to.and_then(start_of_day),
        ..Default::default()
    };
    if args.archived {
        search = search.with_archived(true);
    }
    search
}

fn build_charge(args: &AddArgs) -> ChargeRequest {
    ChargeRequest {
        token: args.token.clone(),
        customer_id: args.customer_id.clone(),
        payment_source_id: args.payment_source_id.clone(),
        reference: args.reference.clone(),
        description: args.description.clone(),
        ..ChargeRequest::new(args.amount, &args.currency)
    }
}

pub async fn run(
    args: &ChargesArgs,
    client: &Client,
    secret_key: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let mut charges = client.charges();
    if let Some(key) = secret_key {
        charges = charges.with_secret_key(key);
    }

    let resp = match &args.action {
        ChargeAction::List => {
            let resp = charges.list().await?;
            return print_list(&resp.resource.data, &resp.json_response, format);
        }
        ChargeAction::Search(search_args) => {
            let resp = charges.search(&build_search(search_args)).await?;
            return print_list(&resp.resource.data, &resp.json_response, format);
        }
        ChargeAction::Get { id } => charges.get(id).await?,
        ChargeAction::Add(add_args) => {
            let request = build_charge(add_args);
            if add_args.authorise_only {
                charges.authorise(&request).await?
            } else {
                charges.add(&request).await?
            }
        }
        ChargeAction::Capture { id, amount } => charges.capture(id, *amount).await?,
        ChargeAction::Cancel { id } => charges.cancel_authorisation(id).await?,
        ChargeAction::Refund { id, amount } => charges.refund(id, *amount).await?,
        ChargeAction::Archive { id } => charges.archive(id).await?,
    };

    print_list(std::slice::from_ref(&resp.resource.data), &resp.json_response, format)
}

fn print_list(
    data: &[paydock_api::types::Charge],
    raw: &str,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => print_charges_table(data),
        OutputFormat::Json => print_raw_json(raw)?,
    }
    Ok(())
}
