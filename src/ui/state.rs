//! Selection state for the interactive season list

use chrono::{DateTime, Local};

use crate::season_fetcher::{Season, select_current_season};

/// Holds the enriched season list and the selection cursor.
///
/// Moving the cursor never caches derived display values; the page is
/// rebuilt from the selected season's raw timestamps on every change.
#[derive(Debug)]
pub struct SelectionState {
    seasons: Vec<Season>,
    selected: Option<usize>,
}

impl SelectionState {
    /// Builds the state from a freshly fetched list, preselecting the
    /// current season. When no season is current (e.g. between acts) the
    /// cursor falls back to the first entry so the list stays navigable.
    pub fn new(seasons: Vec<Season>, now: DateTime<Local>) -> Self {
        let current_uuid = select_current_season(&seasons, now).map(|s| s.uuid.clone());
        let selected = match current_uuid {
            Some(uuid) => seasons.iter().position(|s| s.uuid == uuid),
            None => {
                if seasons.is_empty() {
                    None
                } else {
                    Some(0)
                }
            }
        };
        SelectionState { seasons, selected }
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_season(&self) -> Option<&Season> {
        self.selected.and_then(|i| self.seasons.get(i))
    }

    /// Moves the cursor up one entry, clamped at the top.
    pub fn select_previous(&mut self) -> bool {
        match self.selected {
            Some(i) if i > 0 => {
                self.selected = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Moves the cursor down one entry, clamped at the bottom.
    pub fn select_next(&mut self) -> bool {
        match self.selected {
            Some(i) if i + 1 < self.seasons.len() => {
                self.selected = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Replaces the list after a refresh, re-deriving the default selection.
    pub fn replace_seasons(&mut self, seasons: Vec<Season>, now: DateTime<Local>) {
        *self = SelectionState::new(seasons, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn season(uuid: &str, parent: Option<&str>, start_month: u32, end_month: u32) -> Season {
        Season {
            uuid: uuid.to_string(),
            display_name: uuid.to_uppercase(),
            season_type: parent.map(|_| "EAresSeasonType::Act".to_string()),
            start_time: Utc.with_ymd_and_hms(2024, start_month, 1, 0, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, end_month, 28, 0, 0, 0).unwrap(),
            parent_uuid: parent.map(String::from),
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_preselects_current_season() {
        let seasons = vec![
            season("ep1", None, 1, 12),
            season("act1", Some("ep1"), 1, 3),
            season("act2", Some("ep1"), 3, 9),
        ];
        let state = SelectionState::new(seasons, now());
        assert_eq!(state.selected_season().unwrap().uuid, "act2");
    }

    #[test]
    fn test_new_falls_back_to_first_when_nothing_current() {
        let seasons = vec![season("act1", Some("ep1"), 1, 2)];
        let state = SelectionState::new(seasons, now());
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let state = SelectionState::new(Vec::new(), now());
        assert_eq!(state.selected_index(), None);
        assert!(state.selected_season().is_none());
    }

    #[test]
    fn test_cursor_moves_are_clamped() {
        let seasons = vec![
            season("act1", Some("ep1"), 1, 3),
            season("act2", Some("ep1"), 3, 9),
        ];
        let mut state = SelectionState::new(seasons, now());
        assert_eq!(state.selected_index(), Some(1));

        assert!(!state.select_next());
        assert_eq!(state.selected_index(), Some(1));

        assert!(state.select_previous());
        assert_eq!(state.selected_index(), Some(0));

        assert!(!state.select_previous());
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_reselection_changes_selected_season() {
        let seasons = vec![
            season("act1", Some("ep1"), 1, 3),
            season("act2", Some("ep1"), 3, 9),
        ];
        let mut state = SelectionState::new(seasons, now());
        state.select_previous();
        assert_eq!(state.selected_season().unwrap().uuid, "act1");
    }

    #[test]
    fn test_replace_seasons_rederives_selection() {
        let mut state = SelectionState::new(vec![season("act1", Some("ep1"), 1, 3)], now());
        state.replace_seasons(
            vec![
                season("act1", Some("ep1"), 1, 3),
                season("act2", Some("ep1"), 3, 9),
            ],
            now(),
        );
        assert_eq!(state.selected_season().unwrap().uuid, "act2");
    }
}
