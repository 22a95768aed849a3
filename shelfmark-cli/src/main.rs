//! Shelfmark CLI - the presentation boundary over the shelfmark core

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a rating argument, clamping it into [0, 5] at the input boundary
fn parse_rating(s: &str) -> Result<f32, String> {
    let raw: f32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    Ok(shelfmark_core::validate::clamp_rating(raw))
}

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory holding the persisted store
    #[arg(
        long,
        global = true,
        env = "SHELFMARK_DATA_PATH",
        default_value = "./shelfmark_data"
    )]
    data_dir: String,

    /// Seed document consulted when no persisted labels exist
    /// (defaults to seed.json inside the data directory)
    #[arg(long, global = true)]
    seed: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books with their categories and tags
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a book
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        genre: String,

        /// Personal rating from 0 to 5 (out-of-range values are clamped)
        #[arg(long, default_value = "0", value_parser = parse_rating)]
        rating: f32,

        /// Category name to associate (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Tag name to associate (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Edit fields of an existing book
    Edit {
        /// Id of the book to edit
        id: u32,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        genre: Option<String>,

        #[arg(long, value_parser = parse_rating)]
        rating: Option<f32>,

        /// Replace the category set with these names (repeatable)
        #[arg(long = "category")]
        categories: Option<Vec<String>>,

        /// Replace the tag set with these names (repeatable)
        #[arg(long = "tag")]
        tags: Option<Vec<String>>,

        /// Remove all category associations
        #[arg(long, conflicts_with = "categories")]
        clear_categories: bool,

        /// Remove all tag associations
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },

    /// Delete a book
    Delete {
        /// Id of the book to delete
        id: u32,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: commands::LabelAction,
    },

    /// Manage tags
    Tag {
        #[command(subcommand)]
        action: commands::LabelAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelfmark_cli=debug,shelfmark_core=debug"
    } else {
        "shelfmark_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut ctx = commands::Context::load(&cli.data_dir, cli.seed.as_deref()).await?;

    match cli.command {
        Commands::List { json } => commands::list(&ctx, json),

        Commands::Add {
            title,
            author,
            genre,
            rating,
            categories,
            tags,
        } => commands::add(&mut ctx, title, author, genre, rating, &categories, &tags).await,

        Commands::Edit {
            id,
            title,
            author,
            genre,
            rating,
            categories,
            tags,
            clear_categories,
            clear_tags,
        } => {
            let categories = if clear_categories { Some(Vec::new()) } else { categories };
            let tags = if clear_tags { Some(Vec::new()) } else { tags };
            commands::edit(&mut ctx, id, title, author, genre, rating, categories, tags).await
        }

        Commands::Delete { id } => commands::delete(&mut ctx, id).await,

        Commands::Category { action } => {
            commands::label(&mut ctx, shelfmark_core::LabelKind::Category, action).await
        }

        Commands::Tag { action } => {
            commands::label(&mut ctx, shelfmark_core::LabelKind::Tag, action).await
        }
    }
}
