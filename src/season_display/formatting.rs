//! Japanese calendar formatting and remaining-day computation

use chrono::{DateTime, Datelike, Local, Utc};

use crate::season_fetcher::Season;

/// Single-character weekday names indexed by days-from-Sunday (0..=6)
const WEEKDAY_KANJI: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Fixed message shown when a season's end date has passed
pub const SEASON_ENDED_MESSAGE: &str = "シーズンは終了しました";

/// Formats an instant as a Japanese calendar date in local terms,
/// e.g. `2024年1月10日水曜日`. Month and day are not zero padded.
pub fn format_japanese_date(datetime: DateTime<Local>) -> String {
    let weekday = WEEKDAY_KANJI[datetime.weekday().num_days_from_sunday() as usize];
    format!(
        "{}年{}月{}日{}曜日",
        datetime.year(),
        datetime.month(),
        datetime.day(),
        weekday
    )
}

/// Formats a season's date range as two display lines: the start date with a
/// `から` suffix and the end date with a `まで` suffix.
pub fn format_season_range(season: &Season) -> (String, String) {
    let start = season.start_time.with_timezone(&Local);
    let end = season.end_time.with_timezone(&Local);
    (
        format!("{}から", format_japanese_date(start)),
        format!("{}まで", format_japanese_date(end)),
    )
}

/// Signed whole-day count from `now` to a season's end.
///
/// Both sides are normalized to local midnight before subtracting, so the
/// result is always a whole number of calendar days. Zero means the season
/// ends today.
pub fn days_remaining(end_time: DateTime<Utc>, now: DateTime<Local>) -> i64 {
    let end_date = end_time.with_timezone(&Local).date_naive();
    let today = now.date_naive();
    (end_date - today).num_days()
}

/// Maps a signed remaining-day count to its display text.
/// Non-negative counts render the day-count branch, negative counts render
/// the fixed ended message.
pub fn remaining_days_text(days: i64) -> String {
    if days >= 0 {
        format!("残り{days}日")
    } else {
        SEASON_ENDED_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_japanese_date_sunday() {
        // 2024-01-07 was a Sunday
        let date = Local.with_ymd_and_hms(2024, 1, 7, 10, 0, 0).unwrap();
        assert_eq!(format_japanese_date(date), "2024年1月7日日曜日");
    }

    #[test]
    fn test_format_japanese_date_saturday() {
        // 2024-01-06 was a Saturday
        let date = Local.with_ymd_and_hms(2024, 1, 6, 10, 0, 0).unwrap();
        assert_eq!(format_japanese_date(date), "2024年1月6日土曜日");
    }

    #[test]
    fn test_format_japanese_date_has_no_zero_padding() {
        let date = Local.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let formatted = format_japanese_date(date);
        assert!(formatted.starts_with("2024年3月5日"));
    }

    #[test]
    fn test_format_season_range_suffixes() {
        let season = Season {
            uuid: "act1".to_string(),
            display_name: "アクト1".to_string(),
            season_type: Some("EAresSeasonType::Act".to_string()),
            start_time: Local
                .with_ymd_and_hms(2024, 1, 10, 0, 0, 0)
                .unwrap()
                .with_timezone(&Utc),
            end_time: Local
                .with_ymd_and_hms(2024, 3, 5, 0, 0, 0)
                .unwrap()
                .with_timezone(&Utc),
            parent_uuid: Some("ep1".to_string()),
        };

        let (start_line, end_line) = format_season_range(&season);
        assert_eq!(start_line, "2024年1月10日水曜日から");
        assert_eq!(end_line, "2024年3月5日火曜日まで");
    }

    #[test]
    fn test_days_remaining_zero_when_season_ends_today() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap();
        // End instant earlier the same day; midnight normalization makes it 0
        let end = Local
            .with_ymd_and_hms(2024, 6, 15, 8, 0, 0)
            .unwrap()
            .with_timezone(&Utc);

        let days = days_remaining(end, now);
        assert_eq!(days, 0);
        assert_eq!(remaining_days_text(days), "残り0日");
    }

    #[test]
    fn test_days_remaining_negative_renders_ended_message() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        let end = Local
            .with_ymd_and_hms(2024, 6, 14, 23, 59, 59)
            .unwrap()
            .with_timezone(&Utc);

        let days = days_remaining(end, now);
        assert_eq!(days, -1);
        assert_eq!(remaining_days_text(days), SEASON_ENDED_MESSAGE);
    }

    #[test]
    fn test_days_remaining_is_whole_days_regardless_of_time_of_day() {
        // Late evening now vs early morning end must still be whole days
        let now = Local.with_ymd_and_hms(2024, 6, 15, 23, 45, 0).unwrap();
        let end = Local
            .with_ymd_and_hms(2024, 6, 25, 0, 30, 0)
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(days_remaining(end, now), 10);
    }

    #[test]
    fn test_remaining_days_text_positive() {
        assert_eq!(remaining_days_text(42), "残り42日");
    }
}
