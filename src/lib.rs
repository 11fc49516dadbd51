//! VALORANT Season Checker Library
//!
//! This library provides functionality for fetching VALORANT season metadata
//! and displaying it in a teletext-style format: the season list with parent
//! names resolved, the selected season's date range in Japanese calendar
//! terms, and a signed days-remaining count.
//!
//! # Examples
//!
//! ```rust,no_run
//! use valo_season_checker::config::Config;
//! use valo_season_checker::error::AppError;
//! use valo_season_checker::season_display::SeasonPage;
//! use valo_season_checker::season_fetcher::{create_http_client_with_timeout, fetch_seasons, select_current_season};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // Fetch the season list with parent names resolved
//!     let seasons = fetch_seasons(&client, &config).await?;
//!
//!     // Build a page for the currently active season
//!     let now = chrono::Local::now();
//!     let mut page = SeasonPage::new(222, "VALORANT".to_string(), "シーズン情報".to_string(), false, true);
//!     if let Some(current) = select_current_season(&seasons, now) {
//!         page.add_season_details(current, now);
//!     }
//!
//!     // Render the page to stdout
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod season_display;
pub mod season_fetcher;
pub mod ui;
pub mod version;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use season_display::{SeasonPage, days_remaining, format_season_range, remaining_days_text};
pub use season_fetcher::{Season, fetch_seasons, select_current_season};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
