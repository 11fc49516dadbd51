use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode.
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (render once and exit)
/// - config operations are requested
/// - --version flag is set
/// - --debug mode is enabled (debug mode always runs once and exits)
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.version
        || args.debug
}

/// VALORANT Season Checker
///
/// A teletext-style viewer for VALORANT season metadata. Shows the season
/// list from valorant-api.com, the selected season's date range in Japanese
/// calendar format, and the number of days remaining.
///
/// In interactive mode (default):
/// - Use arrow keys (↑/↓) to select a season
/// - Press 'r' to refresh data from the API
/// - Press 'q' to quit
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show the current season once and exit immediately. Useful for scripts
    /// or quick checks. The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Evaluate the "current season" against a specific date in YYYY-MM-DD
    /// format instead of today.
    #[arg(long = "date", short = 'd', help_heading = "Display Options")]
    pub date: Option<String>,

    /// Update API domain in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN"
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode which doesn't clear the terminal before drawing the UI.
    /// Info logs are written to the log file instead of the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            once: false,
            date: None,
            new_api_domain: None,
            new_log_file_path: None,
            clear_log_file_path: false,
            list_config: false,
            version: false,
            debug: false,
            log_file: None,
        }
    }

    #[test]
    fn test_default_args_are_interactive() {
        assert!(!is_noninteractive_mode(&base_args()));
    }

    #[test]
    fn test_once_is_noninteractive() {
        let args = Args {
            once: true,
            ..base_args()
        };
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_config_operations_are_noninteractive() {
        let args = Args {
            list_config: true,
            ..base_args()
        };
        assert!(is_noninteractive_mode(&args));

        let args = Args {
            new_api_domain: Some("https://example.com".to_string()),
            ..base_args()
        };
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_date_flag_keeps_interactive_mode() {
        let args = Args {
            date: Some("2024-01-15".to_string()),
            ..base_args()
        };
        assert!(!is_noninteractive_mode(&args));
    }
}
