//! Payments CLI
//!
//! Command-line interface for the Payment Record API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use payment_client::PaymentClient;
use payment_types::{ClientType, PaymentDraft, PaymentId};

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payment Record API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payment Record API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all payments
    List,
    /// Get payment details
    Get {
        /// Payment ID (UUID)
        id: String,
    },
    /// Create a payment
    Create {
        /// Ownership type (personal, company, 1, 2)
        #[arg(long = "type")]
        type_code: String,
        /// Active code to transact against
        #[arg(long)]
        active: String,
        /// Owning client code
        #[arg(long)]
        client: String,
        /// Signed amount
        #[arg(long)]
        amount: String,
    },
    /// Update a payment
    Update {
        /// Payment ID (UUID)
        id: String,
        #[arg(long)]
        active: String,
        #[arg(long)]
        client: String,
        #[arg(long)]
        amount: String,
    },
    /// Delete a payment
    Delete {
        /// Payment ID (UUID)
        id: String,
    },
    /// List the payments of one client
    ClientPayments {
        /// Client code
        client: String,
    },
    /// Sum the amounts of one client's payments
    Balance {
        /// Client code
        client: String,
    },
    /// Check API health
    Health,
}

fn parse_client_type(s: &str) -> Result<ClientType> {
    match s.to_lowercase().as_str() {
        "1" | "personal" => Ok(ClientType::Personal),
        "2" | "company" => Ok(ClientType::Company),
        _ => anyhow::bail!("Unknown type: {}. Supported: personal (1), company (2)", s),
    }
}

fn parse_payment_id(s: &str) -> Result<PaymentId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid payment ID: {}", s))
}

fn parse_amount(s: &str) -> Result<Decimal> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid amount: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = PaymentClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::List => {
            let payments = client.list().await?;
            println!("{}", serde_json::to_string_pretty(&payments)?);
        }

        Commands::Get { id } => {
            let id = parse_payment_id(&id)?;
            let payment = client.get_payment(id).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Create {
            type_code,
            active,
            client: client_code,
            amount,
        } => {
            let client_type = parse_client_type(&type_code)?;
            let draft = PaymentDraft {
                active_id: active,
                client_id: client_code,
                amount: parse_amount(&amount)?,
            };
            let payment = client.create(client_type, &draft).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Update {
            id,
            active,
            client: client_code,
            amount,
        } => {
            let id = parse_payment_id(&id)?;
            let draft = PaymentDraft {
                active_id: active,
                client_id: client_code,
                amount: parse_amount(&amount)?,
            };
            let payment = client.update(id, &draft).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Delete { id } => {
            let id = parse_payment_id(&id)?;
            client.delete(id).await?;
            println!("✓ Payment deleted");
        }

        Commands::ClientPayments { client: client_code } => {
            let payments = client.client_payments(&client_code).await?;
            println!("{}", serde_json::to_string_pretty(&payments)?);
        }

        Commands::Balance { client: client_code } => {
            let balance = client.balance(&client_code).await?;
            println!("{}", balance);
        }
    }

    Ok(())
}
