//! URL building utilities for API endpoints

/// Builds the URL for fetching the full season list.
///
/// # Example
/// ```
/// use valo_season_checker::season_fetcher::build_season_list_url;
///
/// let url = build_season_list_url("https://valorant-api.com", "ja-JP");
/// assert_eq!(url, "https://valorant-api.com/v1/seasons?language=ja-JP");
/// ```
pub fn build_season_list_url(api_domain: &str, language: &str) -> String {
    format!("{api_domain}/v1/seasons?language={language}")
}

/// Builds the URL for fetching a single season by uuid.
///
/// # Example
/// ```
/// use valo_season_checker::season_fetcher::build_season_url;
///
/// let url = build_season_url("https://valorant-api.com", "0df5adb9", "ja-JP");
/// assert_eq!(url, "https://valorant-api.com/v1/seasons/0df5adb9?language=ja-JP");
/// ```
pub fn build_season_url(api_domain: &str, uuid: &str, language: &str) -> String {
    format!("{api_domain}/v1/seasons/{uuid}?language={language}")
}
