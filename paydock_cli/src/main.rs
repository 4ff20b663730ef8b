mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use paydock_api::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "paydock")]
#[command(about = "Manage charges and customers through the Paydock API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Secret key for this invocation (defaults to PAYDOCK_SECRET_KEY)
    #[arg(long, global = true)]
    secret_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, capture, refund and look up charges
    Charges(commands::charges::ChargesArgs),
    /// Look up and archive customers
    Customers(commands::customers::CustomersArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("paydock=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let secret_key = cli.secret_key.as_deref();
    let client = Client::from_config(Config::from_env_with_secret_key(secret_key)?)?;

    let result = match &cli.command {
        Commands::Charges(args) => commands::charges::run(args, &client, secret_key, &format).await,
        Commands::Customers(args) => {
            commands::customers::run(args, &client, secret_key, &format).await
        }
    };

    if let Err(err) = &result {
        if let Some(api_err) = err.downcast_ref::<paydock_api::Error>() {
            output::print_api_error(api_err);
        }
    }
    result
}
