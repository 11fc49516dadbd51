//! Interactive UI module
//!
//! Contains the main interactive loop: season selection with the arrow keys,
//! manual refresh, and resize handling. All derived display values are
//! recomputed from the selected season's raw timestamps on every redraw.

pub mod state;

pub use state::SelectionState;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use crossterm::event::{Event, KeyCode, KeyEventKind, poll, read};
use std::io::stdout;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::TELETEXT_PAGE_NUMBER;
use crate::error::AppError;
use crate::season_display::SeasonPage;
use crate::season_fetcher::{create_http_client_with_timeout, fetch_seasons};

const PAGE_TITLE: &str = "VALORANT";
const PAGE_SUBHEADER: &str = "シーズン情報";

/// Input polling interval for the interactive loop
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Builds the full teletext page for the current selection.
///
/// The detail section is always derived fresh from the selected season, so a
/// reselection can never leak the previous selection's formatted values.
pub fn build_season_page(
    state: &SelectionState,
    now: DateTime<Local>,
    show_footer: bool,
    ignore_height_limit: bool,
) -> SeasonPage {
    let mut page = SeasonPage::new(
        TELETEXT_PAGE_NUMBER,
        PAGE_TITLE.to_string(),
        PAGE_SUBHEADER.to_string(),
        show_footer,
        ignore_height_limit,
    );
    page.add_season_list(state.seasons(), state.selected_index());
    if let Some(season) = state.selected_season() {
        page.add_season_details(season, now);
    }
    page
}

/// Builds an error page in place of season content.
pub fn build_error_page(message: &str, show_footer: bool, ignore_height_limit: bool) -> SeasonPage {
    let mut page = SeasonPage::new(
        TELETEXT_PAGE_NUMBER,
        PAGE_TITLE.to_string(),
        PAGE_SUBHEADER.to_string(),
        show_footer,
        ignore_height_limit,
    );
    page.add_error_message(message);
    page
}

/// Resolves the instant "current" is evaluated against: noon local time on
/// the explicitly requested date, or simply now.
pub fn resolve_reference_time(date: Option<&str>) -> Result<DateTime<Local>, AppError> {
    match date {
        None => Ok(Local::now()),
        Some(date_str) => {
            let naive_date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                AppError::config_error(format!("Invalid date '{date_str}': {e}"))
            })?;
            // Noon avoids DST edge cases around midnight
            let naive = naive_date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
            match Local.from_local_datetime(&naive) {
                chrono::LocalResult::Single(dt) => Ok(dt),
                chrono::LocalResult::Ambiguous(_, latest) => Ok(latest),
                chrono::LocalResult::None => Err(AppError::config_error(format!(
                    "Date '{date_str}' does not exist in the local timezone"
                ))),
            }
        }
    }
}

/// Runs the interactive season viewer until the user quits.
///
/// The caller is responsible for raw mode and the alternate screen; this
/// function only draws pages and reacts to input.
pub async fn run_interactive_ui(date: Option<String>, config: &Config) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let mut stdout = stdout();

    let mut state = match fetch_seasons(&client, config).await {
        Ok(seasons) => {
            let now = resolve_reference_time(date.as_deref())?;
            SelectionState::new(seasons, now)
        }
        Err(e) => {
            warn!("Initial season fetch failed: {e}");
            let page = build_error_page(
                &format!("シーズン情報の取得に失敗しました: {e}"),
                true,
                false,
            );
            page.render_buffered(&mut stdout)?;
            wait_for_quit().await?;
            return Ok(());
        }
    };

    let mut needs_render = true;

    loop {
        if needs_render {
            let now = resolve_reference_time(date.as_deref())?;
            let mut page = build_season_page(&state, now, true, false);
            page.handle_resize();
            page.render_buffered(&mut stdout)?;
            needs_render = false;
        }

        if !poll(POLL_INTERVAL)? {
            continue;
        }

        match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("Quit requested");
                    break;
                }
                KeyCode::Up => {
                    needs_render = state.select_previous();
                }
                KeyCode::Down => {
                    needs_render = state.select_next();
                }
                KeyCode::Char('r') => {
                    info!("Manual refresh requested");
                    match fetch_seasons(&client, config).await {
                        Ok(seasons) => {
                            let now = resolve_reference_time(date.as_deref())?;
                            state.replace_seasons(seasons, now);
                        }
                        Err(e) => {
                            warn!("Refresh failed, keeping previous data: {e}");
                        }
                    }
                    needs_render = true;
                }
                _ => {}
            },
            Event::Resize(_, _) => {
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Blocks until the user presses 'q' or Esc. Used on the error page, where
/// there is nothing else to interact with.
async fn wait_for_quit() -> Result<(), AppError> {
    loop {
        if !poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = read()?
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            return Ok(());
        }
    }
}
