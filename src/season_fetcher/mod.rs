pub mod api;
pub mod models;
pub mod resolver;
pub mod urls;

pub use api::{create_http_client_with_timeout, fetch_season, fetch_seasons};
pub use models::{Season, SeasonListResponse, SeasonResponse};
pub use resolver::{resolve_display_names, select_current_season};
pub use urls::{build_season_list_url, build_season_url};
