//! Command-line interface for gateway admin operations.
//!
//! Thin wrapper over [`AdminClient`]; every subcommand maps to one admin
//! endpoint and prints the response as pretty JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use gateway_admin_sdk::{AdminClient, ConfigBuilder, KeyQuery};

#[derive(Parser)]
#[command(
    name = "gateway-admin",
    version,
    about = "Manage gateway keys, pricing rules, and access tokens"
)]
struct Cli {
    /// Gateway base URL
    #[arg(long, env = "GATEWAY_ADMIN_URL", default_value = "http://127.0.0.1:8000")]
    url: String,

    /// Admin key, sent as the bearer credential
    #[arg(long, env = "GATEWAY_ADMIN_KEY")]
    admin_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show aggregate key statistics
    Stats,
    /// List keys
    Keys {
        /// Filter by status (active, exhausted, invalid)
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 50)]
        page_size: u32,
    },
    /// Add a single key
    AddKey {
        key: String,
        #[arg(long, default_value_t = 0.24)]
        balance: f64,
    },
    /// Delete a key by record id
    DeleteKey { id: i64 },
    /// Import keys from a CSV file (key,balance per line)
    ImportCsv { file: PathBuf },
    /// Import keys from a plain-text file (one key per line)
    ImportText {
        file: PathBuf,
        #[arg(long, default_value_t = 0.24)]
        default_balance: f64,
    },
    /// Delete keys the server flags as invalid
    DeleteInvalid,
    /// Refresh every key's balance against the upstream
    Sync,
    /// Refresh one key's balance against the upstream
    SyncKey { id: i64 },
    /// List pricing rules
    Pricing,
    /// Add a pricing rule
    AddPricing {
        pattern: String,
        price: f64,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Update a pricing rule's price and description
    UpdatePricing {
        id: i64,
        price: f64,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a pricing rule
    DeletePricing { id: i64 },
    /// Look up the effective price for a model
    CheckPrice { model: String },
    /// List upstream models grouped by family
    Models,
    /// List access tokens
    Tokens,
    /// Create an access token
    CreateToken { name: String },
    /// Enable or disable an access token
    ToggleToken {
        id: i64,
        #[arg(long)]
        enabled: bool,
    },
    /// Delete an access token
    DeleteToken { id: i64 },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn file_name(path: &PathBuf) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "import".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut builder = ConfigBuilder::new(&cli.url).timeout(cli.timeout);
    if let Some(key) = &cli.admin_key {
        builder = builder.admin_key(key);
    }
    let client = AdminClient::new(builder.build()).context("failed to create admin client")?;

    match cli.command {
        Command::Stats => print_json(&client.stats().await?)?,
        Command::Keys {
            status,
            page,
            page_size,
        } => {
            let query = KeyQuery {
                status,
                page,
                page_size,
            };
            print_json(&client.keys(&query).await?)?;
        }
        Command::AddKey { key, balance } => print_json(&client.add_key(&key, balance).await?)?,
        Command::DeleteKey { id } => print_json(&client.delete_key(id).await?)?,
        Command::ImportCsv { file } => {
            let content = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            print_json(&client.import_keys_csv(&file_name(&file), content).await?)?;
        }
        Command::ImportText {
            file,
            default_balance,
        } => {
            let content = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            print_json(
                &client
                    .import_keys_text(&file_name(&file), content, default_balance)
                    .await?,
            )?;
        }
        Command::DeleteInvalid => print_json(&client.delete_invalid_keys().await?)?,
        Command::Sync => print_json(&client.sync_all_keys().await?)?,
        Command::SyncKey { id } => print_json(&client.sync_key(id).await?)?,
        Command::Pricing => print_json(&client.pricing().await?)?,
        Command::AddPricing {
            pattern,
            price,
            description,
        } => print_json(&client.add_pricing(&pattern, price, &description).await?)?,
        Command::UpdatePricing {
            id,
            price,
            description,
        } => print_json(&client.update_pricing(id, price, &description).await?)?,
        Command::DeletePricing { id } => print_json(&client.delete_pricing(id).await?)?,
        Command::CheckPrice { model } => print_json(&client.check_model_price(&model).await?)?,
        Command::Models => print_json(&client.upstream_models().await?)?,
        Command::Tokens => print_json(&client.tokens().await?)?,
        Command::CreateToken { name } => print_json(&client.create_token(&name).await?)?,
        Command::ToggleToken { id, enabled } => {
            print_json(&client.toggle_token(id, enabled).await?)?
        }
        Command::DeleteToken { id } => print_json(&client.delete_token(id).await?)?,
    }

    Ok(())
}
