//! Fieldbase command-line client
//!
//! Thin front end over `fieldbase-client`: every subcommand is one API call
//! whose result is printed to stdout as pretty JSON. Logs go to stderr.
//!
//! Usage:
//!   fieldbase --token <TOKEN> databases list --limit 10
//!   FIELDBASE_TOKEN=... fieldbase items get <COLLECTION_ID> <ITEM_ID>

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use fieldbase_client::{
    Client, ClientConfig, Item, ListOptions, DEFAULT_API_VERSION, DEFAULT_BASE_URL,
};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "fieldbase")]
#[command(about = "Command-line client for the Fieldbase content API")]
struct Args {
    /// API token sent as a bearer credential
    #[arg(long, env = "FIELDBASE_TOKEN", hide_env_values = true)]
    token: String,

    /// Protocol version sent in the accept-version header
    #[arg(long, default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// API base URL
    #[arg(long, env = "FIELDBASE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the account the token belongs to
    Me,
    /// Manage databases
    #[command(subcommand)]
    Databases(DatabaseCommand),
    /// Inspect collections
    #[command(subcommand)]
    Collections(CollectionCommand),
    /// Inspect collection fields
    #[command(subcommand)]
    Fields(FieldCommand),
    /// Inspect collection items
    #[command(subcommand)]
    Items(ItemCommand),
}

#[derive(Subcommand, Debug)]
enum DatabaseCommand {
    List(ListArgs),
    Get { id: String },
    Create { name: String },
    Rename { id: String, name: String },
    Delete { id: String },
    /// Share a database with another account by email
    Share { id: String, email: String },
}

#[derive(Subcommand, Debug)]
enum CollectionCommand {
    List {
        database_id: String,
        #[command(flatten)]
        list: ListArgs,
    },
    Get { id: String },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum FieldCommand {
    List { collection_id: String },
    Get { collection_id: String, field_id: String },
    Delete { collection_id: String, field_id: String },
}

#[derive(Subcommand, Debug)]
enum ItemCommand {
    List {
        collection_id: String,
        #[command(flatten)]
        list: ListArgs,
    },
    Get { collection_id: String, item_id: String },
    Delete { collection_id: String, item_id: String },
}

/// Paging and projection flags shared by list commands.
#[derive(ClapArgs, Debug, Default)]
struct ListArgs {
    #[arg(long)]
    page: Option<u32>,

    #[arg(long)]
    limit: Option<u32>,

    /// Sort key, prefix with '-' for descending
    #[arg(long)]
    sort: Option<String>,

    /// Comma-separated field projection
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,
}

impl ListArgs {
    fn options(&self) -> ListOptions {
        let mut options = ListOptions::new();
        if let Some(page) = self.page {
            options = options.page(page);
        }
        if let Some(limit) = self.limit {
            options = options.limit(limit);
        }
        if let Some(sort) = &self.sort {
            options = options.sort(sort.clone());
        }
        if !self.fields.is_empty() {
            options = options.fields(self.fields.iter().cloned());
        }
        options
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = ClientConfig::new(args.token)
        .with_version(args.api_version)
        .with_base_url(args.base_url)
        .with_timeout_secs(args.timeout);
    let client = Client::new(config).context("Failed to create client")?;
    debug!("Using {} (version {})", client.base_url(), client.version());

    run(&client, args.command).await
}

async fn run(client: &Client, command: Command) -> Result<()> {
    match command {
        Command::Me => print(&client.get_current_user().await?),
        Command::Databases(command) => databases(client, command).await,
        Command::Collections(command) => collections(client, command).await,
        Command::Fields(command) => fields(client, command).await,
        Command::Items(command) => items(client, command).await,
    }
}

async fn databases(client: &Client, command: DatabaseCommand) -> Result<()> {
    match command {
        DatabaseCommand::List(list) => print(&client.get_databases(&list.options()).await?),
        DatabaseCommand::Get { id } => {
            let database = client.get_database_by_id(&id).await?;
            print(&found(database, "database", &id)?)
        }
        DatabaseCommand::Create { name } => print(&client.create_database(&name).await?),
        DatabaseCommand::Rename { id, name } => {
            let database = client.update_database(&id, &name).await?;
            print(&found(database, "database", &id)?)
        }
        DatabaseCommand::Delete { id } => {
            let summary = client.delete_database(&id).await?;
            print(&found(summary, "database", &id)?)
        }
        DatabaseCommand::Share { id, email } => {
            let outcome = client.share_database(&id, &email).await?;
            print(&outcome)?;
            if !outcome.shared {
                anyhow::bail!("Sharing database {id} with {email} failed");
            }
            Ok(())
        }
    }
}

async fn collections(client: &Client, command: CollectionCommand) -> Result<()> {
    match command {
        CollectionCommand::List { database_id, list } => print(
            &client
                .get_collections_by_database_id(&database_id, &list.options())
                .await?,
        ),
        CollectionCommand::Get { id } => {
            let collection = client.get_collection_by_id(&id).await?;
            print(&found(collection, "collection", &id)?)
        }
        CollectionCommand::Delete { id } => {
            let summary = client.delete_collection(&id).await?;
            print(&found(summary, "collection", &id)?)
        }
    }
}

async fn fields(client: &Client, command: FieldCommand) -> Result<()> {
    match command {
        FieldCommand::List { collection_id } => {
            print(&client.get_fields(&collection_id, None).await?)
        }
        FieldCommand::Get {
            collection_id,
            field_id,
        } => {
            let field = client.get_field_by_id(&collection_id, &field_id, None).await?;
            print(&found(field, "field", &field_id)?)
        }
        FieldCommand::Delete {
            collection_id,
            field_id,
        } => {
            let summary = client.delete_field(&collection_id, &field_id, None).await?;
            print(&found(summary, "field", &field_id)?)
        }
    }
}

async fn items(client: &Client, command: ItemCommand) -> Result<()> {
    match command {
        ItemCommand::List {
            collection_id,
            list,
        } => {
            let items: Vec<Item> = client.get_items(&collection_id, &list.options()).await?;
            print(&items)
        }
        ItemCommand::Get {
            collection_id,
            item_id,
        } => {
            let item: Option<Item> = client.get_item_by_id(&collection_id, &item_id).await?;
            print(&found(item, "item", &item_id)?)
        }
        ItemCommand::Delete {
            collection_id,
            item_id,
        } => {
            let summary = client.delete_item(&collection_id, &item_id).await?;
            print(&found(summary, "item", &item_id)?)
        }
    }
}

fn found<T>(value: Option<T>, kind: &str, id: &str) -> Result<T> {
    value.with_context(|| format!("{kind} {id} not found"))
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{json}");
    Ok(())
}
