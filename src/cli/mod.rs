pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::domain::EntityKind;

#[derive(Parser)]
#[command(name = "hisn")]
#[command(about = "Supplications and remembrances from the hadith corpus", long_about = None)]
pub struct Cli {
    /// Corpus base URL or local directory (overrides the config file)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Number of books loaded concurrently during a scan
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,

    /// Config file to use instead of ~/.config/hisn/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(source) = &self.source {
            config.corpus.source = source.clone();
        }
        if let Some(workers) = self.workers {
            config.corpus.workers = workers.max(1);
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List supplications
    Duas {
        /// Only entries containing this text
        #[arg(short, long)]
        query: Option<String>,
        /// Category id (dua-cat-...) or name
        #[arg(short, long)]
        category: Option<String>,
        /// Preferred language (currently has no effect)
        #[arg(long)]
        lang: Option<String>,
        /// Only favorites
        #[arg(short, long)]
        favorites: bool,
    },
    /// List remembrances
    Azkar {
        /// Only entries containing this text
        #[arg(short, long)]
        query: Option<String>,
        /// Category id (zikr-cat-...) or name
        #[arg(short, long)]
        category: Option<String>,
        /// Preferred language (currently has no effect)
        #[arg(long)]
        lang: Option<String>,
        /// Only favorites
        #[arg(short, long)]
        favorites: bool,
    },
    /// List categories of duas or azkar
    Categories {
        /// duas or azkar
        kind: EntityKind,
    },
    /// Show one entry with its narrator and source
    Show {
        /// Entry id, e.g. dua-bukhari-6306
        id: String,
    },
    /// Toggle the favorite state of an entry
    Favorite {
        /// Entry id, e.g. zikr-muslim-2691
        id: String,
    },
    /// Report which books of the corpus can be loaded
    Books,
    /// Report where the served collections come from
    Status,
}
