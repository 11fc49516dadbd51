//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and configuration constants
//! so the rest of the codebase stays free of scattered literals.

#![allow(dead_code)]

/// Default API domain for the public VALORANT metadata API
pub const DEFAULT_API_DOMAIN: &str = "https://valorant-api.com";

/// Default language parameter for season display names
pub const DEFAULT_LANGUAGE: &str = "ja-JP";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Teletext page number shown in the header
pub const TELETEXT_PAGE_NUMBER: u16 = 222;

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "VALO_API_DOMAIN";

    /// Environment variable for language override
    pub const LANGUAGE: &str = "VALO_LANGUAGE";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "VALO_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "VALO_HTTP_TIMEOUT";
}

/// Retry configuration for transient HTTP failures
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Rows reserved for header, subheader and footer
    pub const CHROME_ROWS: u16 = 5;
}
