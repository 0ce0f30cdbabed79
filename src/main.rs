use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hisn::app::AppContext;
use hisn::cli::commands::{self, ListOptions};
use hisn::cli::{Cli, Commands};
use hisn::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config = cli.apply_overrides(config);
    let ctx = AppContext::new(&config)?;

    match &cli.command {
        Commands::Duas {
            query,
            category,
            lang,
            favorites,
        } => {
            let opts = ListOptions {
                query: query.as_deref(),
                category: category.as_deref(),
                lang: lang.as_deref(),
                favorites_only: *favorites,
            };
            commands::list_duas(&ctx, &opts).await?;
        }
        Commands::Azkar {
            query,
            category,
            lang,
            favorites,
        } => {
            let opts = ListOptions {
                query: query.as_deref(),
                category: category.as_deref(),
                lang: lang.as_deref(),
                favorites_only: *favorites,
            };
            commands::list_azkar(&ctx, &opts).await?;
        }
        Commands::Categories { kind } => {
            commands::list_categories(&ctx, *kind).await?;
        }
        Commands::Show { id } => {
            commands::show_entry(&ctx, id).await?;
        }
        Commands::Favorite { id } => {
            commands::toggle_favorite(&ctx, id).await?;
        }
        Commands::Books => {
            commands::list_books(&ctx).await?;
        }
        Commands::Status => {
            commands::status(&ctx).await?;
        }
    }

    Ok(())
}
