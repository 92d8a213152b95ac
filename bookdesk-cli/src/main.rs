//! Bookdesk CLI - Command-line interface for book management

mod commands;
mod output;

use anyhow::Result;
use bookdesk_core::model::{BookStatus, Genre};
use bookdesk_core::{BookStore, ClientConfig, HttpCollection, StoreOptions};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate page argument (must be at least 1)
fn parse_page(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the book collection (defaults to BOOKDESK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books, with optional search and filters
    List {
        /// Match title or author (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only books of this genre
        #[arg(short, long)]
        genre: Option<Genre>,

        /// Only books with this status (Available, Issued)
        #[arg(long)]
        status: Option<BookStatus>,

        /// Page to show (must be at least 1)
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new book
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        genre: String,

        /// Year of publication
        #[arg(long)]
        year: i32,

        #[arg(long, default_value = "Available")]
        status: String,
    },

    /// Edit an existing book; omitted fields keep their value
    Edit {
        /// Book identifier
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        genre: Option<String>,

        /// Year of publication
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a book
    Delete {
        /// Book identifier
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the available genres
    Genres,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookdesk_cli=debug,bookdesk_core=debug"
    } else {
        "bookdesk_cli=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    tracing::debug!("Using collection at {}", config.api_url);

    let store = BookStore::with_options(
        Arc::new(HttpCollection::new(config.api_url.as_str())),
        StoreOptions {
            guard_in_flight: config.guard_in_flight,
        },
    );

    match cli.command {
        Commands::List {
            search,
            genre,
            status,
            page,
            json,
        } => {
            let query = commands::ListQuery {
                search,
                genre,
                status,
                page,
            };
            commands::list(&store, query, json).await
        }

        Commands::Add {
            title,
            author,
            genre,
            year,
            status,
        } => {
            let draft = bookdesk_core::BookDraft {
                title,
                author,
                genre,
                published_year: Some(year),
                status,
            };
            commands::add(&store, draft).await
        }

        Commands::Edit {
            id,
            title,
            author,
            genre,
            year,
            status,
        } => {
            let changes = commands::Changes {
                title,
                author,
                genre,
                published_year: year,
                status,
            };
            commands::edit(&store, &id, changes).await
        }

        Commands::Delete { id, yes } => commands::delete(&store, &id, yes).await,

        Commands::Genres => {
            commands::genres();
            Ok(())
        }
    }
}
