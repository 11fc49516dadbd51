//! HTTP client setup and season fetching with retry logic and error handling

use futures::future::try_join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;
use crate::constants::retry;
use crate::error::AppError;
use crate::season_fetcher::models::{Season, SeasonListResponse, SeasonResponse};
use crate::season_fetcher::resolver::resolve_display_names;
use crate::season_fetcher::urls::{build_season_list_url, build_season_url};

/// Creates a properly configured HTTP client with connection pooling and
/// timeout handling.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Generic fetch function with retry logic and comprehensive error handling.
///
/// Retries transient failures (429, 5xx, timeouts, connection errors) with
/// exponential backoff, respecting Retry-After headers for rate limiting.
/// Maps HTTP status codes to specific error types.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut attempt = 0u32;
    let max_retries = retry::MAX_ATTEMPTS;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if (status.as_u16() == 429 || status.is_server_error()) && attempt < max_retries {
                    // Respect Retry-After if provided
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(Duration::from_secs);
                    let wait = retry_after.unwrap_or(backoff);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status,
                        url,
                        wait,
                        attempt + 1,
                        max_retries
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                break resp;
            }
            Err(e) => {
                if (e.is_timeout() || e.is_connect()) && attempt < max_retries {
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        e,
                        url,
                        backoff,
                        attempt + 1,
                        max_retries
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, e);
                return if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else if e.is_connect() {
                    Err(AppError::network_connection(url, e.to_string()))
                } else {
                    Err(AppError::ApiFetch(e))
                };
            }
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            500..=599 => {
                if status_code == 502 || status_code == 503 {
                    AppError::api_service_unavailable(status_code, reason, url)
                } else {
                    AppError::api_server_error(status_code, reason, url)
                }
            }
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches a single season by uuid.
#[allow(dead_code)]
pub async fn fetch_season(
    client: &Client,
    config: &Config,
    uuid: &str,
) -> Result<Season, AppError> {
    let url = build_season_url(&config.api_domain, uuid, &config.language);
    let response: SeasonResponse = fetch(client, &url).await?;
    Ok(response.data)
}

/// Fetches the full season list with parent display names resolved.
///
/// The raw list is fetched first, then every distinct parent uuid referenced
/// by a child season is looked up concurrently. All parent lookups are joined
/// at a single barrier before name resolution; if any lookup fails the whole
/// batch fails. The returned list is a fresh `Vec` with enriched names, the
/// fetched data is never mutated in place.
#[instrument(skip(client, config))]
pub async fn fetch_seasons(client: &Client, config: &Config) -> Result<Vec<Season>, AppError> {
    let list_url = build_season_list_url(&config.api_domain, &config.language);
    let response: SeasonListResponse = fetch::<SeasonListResponse>(client, &list_url).await?;
    let seasons = response.data;
    info!("Fetched {} seasons", seasons.len());

    // Children often share a parent; look each distinct parent up once
    let mut parent_uuids: Vec<&str> = seasons
        .iter()
        .filter_map(|s| s.parent_uuid.as_deref())
        .collect();
    parent_uuids.sort_unstable();
    parent_uuids.dedup();
    debug!("Resolving {} parent seasons", parent_uuids.len());

    let parent_fetches = parent_uuids.iter().map(|uuid| {
        let url = build_season_url(&config.api_domain, uuid, &config.language);
        async move {
            let response: SeasonResponse = fetch(client, &url).await?;
            Ok::<Season, AppError>(response.data)
        }
    });

    // Single join point: name resolution only starts once every parent
    // lookup has completed
    let parents = try_join_all(parent_fetches).await?;

    let parent_names: HashMap<String, String> = parents
        .into_iter()
        .map(|parent| (parent.uuid, parent.display_name))
        .collect();

    Ok(resolve_display_names(&seasons, &parent_names))
}
