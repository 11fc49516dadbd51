pub mod colors;
pub mod formatting;
pub mod page;

pub use formatting::{
    SEASON_ENDED_MESSAGE, days_remaining, format_japanese_date, format_season_range,
    remaining_days_text,
};
pub use page::{SeasonPage, SeasonRow};
