// ABOUTME: Barkeep CLI - browse, filter and inspect the cocktail catalog from a terminal
// ABOUTME: Handles list/show browsing, favorites management, and venue/category listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors
//!
//! Usage:
//! ```bash
//! # Everything in the catalog
//! barkeep-cli list
//!
//! # Rum drinks that can be made at the harbour bar
//! barkeep-cli list --category rum --venue harbour
//!
//! # Must contain lime and mint, must not contain cream
//! barkeep-cli list --include lime --include mint --exclude cream
//!
//! # The harbour bar's curated menu
//! barkeep-cli list --scope curated --venue harbour
//!
//! # Full recipe with missing ingredients for a venue
//! barkeep-cli show mojito --venue harbour
//!
//! # Favorites
//! barkeep-cli favorite toggle mojito
//! barkeep-cli favorite list
//! ```

mod commands;
mod helpers;

use barkeep::config::environment::ServerConfig;
use barkeep::errors::AppResult;
use barkeep::logging::LoggingConfig;
use barkeep::models::Difficulty;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

use helpers::session::Session;

#[derive(Parser)]
#[command(
    name = "barkeep-cli",
    about = "Barkeep cocktail catalog",
    long_about = "Browse and filter the cocktail catalog, check what each venue can make, and manage favorites."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog locale override
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Favorites state directory override
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List recipes matching the given filters
    List(ListArgs),

    /// Show one recipe in full
    Show {
        /// Recipe id
        id: String,

        /// Venue to check availability against
        #[arg(long)]
        venue: Option<String>,
    },

    /// Favorite management commands
    Favorite {
        #[command(subcommand)]
        action: FavoriteCommand,
    },

    /// List known venues with their stock size
    Venues,

    /// List spirit and thematic categories
    Categories,
}

/// Filter facets for `list`
#[derive(Args)]
struct ListArgs {
    /// Spirit category id
    #[arg(long)]
    category: Option<String>,

    /// Difficulty (easy, medium, hard)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Glass name or part of it
    #[arg(long)]
    glass: Option<String>,

    /// Ingredient that must appear (repeatable)
    #[arg(long = "include")]
    include: Vec<String>,

    /// Ingredient that must not appear (repeatable)
    #[arg(long = "exclude")]
    exclude: Vec<String>,

    /// Flavor that must appear (repeatable)
    #[arg(long = "flavor")]
    flavors: Vec<String>,

    /// Tag that must appear (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Thematic category id; any one matches (repeatable)
    #[arg(long = "theme")]
    themes: Vec<String>,

    /// Text searched in names, ingredients and tags
    #[arg(long)]
    search: Option<String>,

    /// Venue to check availability against (`all` for none)
    #[arg(long)]
    venue: Option<String>,

    /// Part of the catalog to browse
    #[arg(long, value_enum, default_value_t = ScopeArg::Catalog)]
    scope: ScopeArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScopeArg {
    /// Every recipe
    Catalog,
    /// Favorited recipes only
    Favorites,
    /// The selected venue's curated list
    Curated,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoriteCommand {
    /// Mark a recipe as favorite
    Add {
        /// Recipe id
        id: String,
    },

    /// Unmark a recipe
    Remove {
        /// Recipe id
        id: String,
    },

    /// Flip a recipe's favorite status
    Toggle {
        /// Recipe id
        id: String,
    },

    /// List favorite recipes
    List,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Warning: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = ServerConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(state_dir) = cli.state_dir {
        config.state_dir = state_dir;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    config.validate()?;
    // One-shot process: no background cache sweeping
    config.cache.enable_background_cleanup = false;
    config.log_summary();

    let mut session = Session::open(&config).await?;
    debug!(recipes = session.snapshot.recipes().len(), "Session ready");

    match cli.command {
        Command::List(args) => commands::browse::list(&session, &config, args),
        Command::Show { id, venue } => commands::browse::show(&session, &config, &id, venue.as_deref()),
        Command::Favorite { action } => match action {
            FavoriteCommand::Add { id } => commands::favorite::add(&mut session, &id),
            FavoriteCommand::Remove { id } => commands::favorite::remove(&mut session, &id),
            FavoriteCommand::Toggle { id } => commands::favorite::toggle(&mut session, &id),
            FavoriteCommand::List => {
                commands::favorite::list(&session);
                Ok(())
            }
        },
        Command::Venues => {
            commands::catalog::venues(&session);
            Ok(())
        }
        Command::Categories => {
            commands::catalog::categories(&session);
            Ok(())
        }
    }
}
