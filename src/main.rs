// src/main.rs
mod cli;
mod config;
mod constants;
mod error;
mod logging;
mod season_display;
mod season_fetcher;
mod ui;
mod version;

use clap::Parser;
use cli::Args;
use config::Config;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use error::AppError;
use season_fetcher::{create_http_client_with_timeout, fetch_seasons};
use std::io::stdout;
use ui::{SelectionState, build_error_page, build_season_page, resolve_reference_time};

const TERMINAL_TITLE: &str = "VALORANT 222";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Set up logging to console and/or file depending on mode. The guard
    // must stay alive so buffered log lines are flushed on exit.
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle version flag first
    if args.version {
        execute!(stdout(), crossterm::terminal::SetTitle(TERMINAL_TITLE))?;

        version::print_logo();

        if let Some(latest_version) = version::check_latest_version().await {
            let current =
                semver::Version::parse(env!("CARGO_PKG_VERSION")).map_err(AppError::VersionParse)?;
            let latest =
                semver::Version::parse(&latest_version).map_err(AppError::VersionParse)?;

            if latest > current {
                version::print_version_info(&latest_version);
            } else {
                println!();
                version::print_version_status_box(vec![
                    ("Valo Season Checker Status".to_string(), None),
                    ("".to_string(), None),
                    (
                        format!("Version: {}", env!("CARGO_PKG_VERSION")),
                        Some(crossterm::style::Color::AnsiValue(231)), // Teletext white
                    ),
                    ("You're running the latest version!".to_string(), None),
                ]);
            }
        }

        return Ok(());
    }

    // Handle configuration operations without version check
    if args.list_config {
        execute!(stdout(), crossterm::terminal::SetTitle(TERMINAL_TITLE))?;

        version::print_logo();
        Config::display().await?;
        return Ok(());
    }

    // Handle configuration updates
    if args.new_api_domain.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_domain) = args.new_api_domain {
            config.api_domain = new_domain;
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // Check for a new version in the background for non-config operations
    let version_check = tokio::spawn(version::check_latest_version());

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if args.once || args.debug {
        // Quick view mode - show the current season once and exit
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

        let page = match fetch_seasons(&client, &config).await {
            Ok(seasons) => {
                let now = resolve_reference_time(args.date.as_deref())?;
                let state = SelectionState::new(seasons, now);
                if state.selected_season().is_some() {
                    build_season_page(&state, now, false, true)
                } else {
                    build_error_page("シーズンが見つかりませんでした", false, true)
                }
            }
            Err(e) => build_error_page(
                &format!("シーズン情報の取得に失敗しました: {e}"),
                false,
                true,
            ),
        };

        execute!(stdout(), crossterm::terminal::SetTitle(TERMINAL_TITLE))?;

        page.render_buffered(&mut stdout())?;
        println!(); // Add a newline at the end

        // Show version info after display if update is available
        if let Ok(Some(latest_version)) = version_check.await {
            version::print_version_info(&latest_version);
        }
        return Ok(());
    }

    // Interactive mode
    enable_raw_mode()?;
    let mut stdout = stdout();

    execute!(stdout, crossterm::terminal::SetTitle(TERMINAL_TITLE))?;
    execute!(stdout, EnterAlternateScreen)?;

    let result = ui::run_interactive_ui(args.date.clone(), &config).await;

    // Clean up terminal
    execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    // Show version info after UI closes if update is available
    if let Ok(Some(latest_version)) = version_check.await {
        version::print_version_info(&latest_version);
    }

    result
}
