//! # hisn
//!
//! Supplications (duas) and remembrance formulas (azkar) extracted from a
//! hadith corpus.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → Loader → Classifier → Converter → Index → Query
//! ```
//!
//! Books are fetched lazily and cached for the process lifetime. One scan
//! classifies every hadith of every book and builds both collections, after
//! which all queries run against the in-memory index.
//!
//! ## Quick Start
//!
//! ```bash
//! # Supplications mentioning forgiveness
//! hisn duas -q forgiveness
//!
//! # Categories of remembrances
//! hisn categories azkar
//!
//! # Use a local copy of the corpus
//! hisn --source ~/hadith-json/db/by_book status
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the loader,
/// index, favorites and query service.
pub mod app;

/// Heuristic dua/zikr classification of hadith text.
pub mod classifier;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/hisn/config.toml`.
pub mod config;

/// Raw hadith to entity conversion: titles, references, tags, benefits
/// and repetition counts.
pub mod converter;

/// Core domain models.
///
/// - [`RawBook`](domain::RawBook) and [`RawHadith`](domain::RawHadith): normalized corpus records
/// - [`Supplication`](domain::Supplication) and [`Remembrance`](domain::Remembrance): extracted entities
/// - [`Category`](domain::Category): derived taxonomy
pub mod domain;

/// Corpus document retrieval.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait, `Missing` vs transport error
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`FsFetcher`](fetcher::FsFetcher): local directory
pub mod fetcher;

/// The scanned, cached collections and their derived categories.
pub mod index;

/// Per-book cache with single-flight loading.
pub mod loader;

/// Book document parsing into [`RawBook`](domain::RawBook).
pub mod normalizer;

/// Search and category filtering.
pub mod query;

/// Favorites persistence.
///
/// - [`FavoritesStore`](store::FavoritesStore): key-value trait
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;
