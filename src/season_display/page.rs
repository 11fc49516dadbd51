//! Teletext-style page model and rendering for season information

use chrono::{DateTime, Local};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

use crate::constants::ui::CHROME_ROWS;
use crate::error::AppError;
use crate::season_display::colors::*;
use crate::season_display::formatting::{days_remaining, format_season_range, remaining_days_text};
use crate::season_fetcher::Season;

/// Rows below the season list needed for the detail section
const DETAIL_ROWS: u16 = 6;

#[derive(Debug)]
pub struct SeasonPage {
    page_number: u16,
    title: String,
    subheader: String,
    rows: Vec<SeasonRow>,
    screen_height: u16,
    show_footer: bool,
    ignore_height_limit: bool,
}

#[derive(Debug)]
pub enum SeasonRow {
    SeasonEntry { name: String, selected: bool },
    SectionHeader(String),
    RangeLine(String),
    RemainingLine(String),
    ErrorMessage(String),
}

impl SeasonPage {
    /// Creates a new page with the given header chrome.
    ///
    /// `ignore_height_limit` disables terminal-size handling and screen
    /// clearing for snapshot (`--once`) output.
    pub fn new(
        page_number: u16,
        title: String,
        subheader: String,
        show_footer: bool,
        ignore_height_limit: bool,
    ) -> Self {
        let screen_height = if ignore_height_limit {
            24
        } else {
            crossterm::terminal::size().map(|(_, h)| h).unwrap_or(24)
        };

        SeasonPage {
            page_number,
            title,
            subheader,
            rows: Vec::new(),
            screen_height,
            show_footer,
            ignore_height_limit,
        }
    }

    /// Adds the season list with the selection marker on `selected`.
    pub fn add_season_list(&mut self, seasons: &[Season], selected: Option<usize>) {
        for (i, season) in seasons.iter().enumerate() {
            self.rows.push(SeasonRow::SeasonEntry {
                name: season.display_name.clone(),
                selected: selected == Some(i),
            });
        }
    }

    /// Adds the detail section for one season: the formatted date range and
    /// the remaining-day text, both computed from the season's raw
    /// timestamps at call time.
    pub fn add_season_details(&mut self, season: &Season, now: DateTime<Local>) {
        let (start_line, end_line) = format_season_range(season);
        self.rows
            .push(SeasonRow::SectionHeader("シーズン期間：".to_string()));
        self.rows.push(SeasonRow::RangeLine(start_line));
        self.rows.push(SeasonRow::RangeLine(end_line));

        let days = days_remaining(season.end_time, now);
        self.rows
            .push(SeasonRow::SectionHeader("シーズン残り日数：".to_string()));
        self.rows
            .push(SeasonRow::RemainingLine(remaining_days_text(days)));
    }

    /// Adds an error message row, rendered in the error color.
    pub fn add_error_message(&mut self, message: &str) {
        self.rows
            .push(SeasonRow::ErrorMessage(message.to_string()));
    }

    /// Updates the cached screen height after a terminal resize.
    pub fn handle_resize(&mut self) {
        if let Ok((_, height)) = crossterm::terminal::size() {
            self.screen_height = height;
        }
    }

    #[cfg(test)]
    pub fn set_screen_height(&mut self, height: u16) {
        self.screen_height = height;
    }

    /// Number of season-list rows that fit on screen alongside the chrome
    /// and the detail section.
    fn list_capacity(&self) -> usize {
        if self.ignore_height_limit {
            return usize::MAX;
        }
        self.screen_height
            .saturating_sub(CHROME_ROWS + DETAIL_ROWS)
            .max(1) as usize
    }

    /// Renders the page into the writer with a single flush at the end.
    /// Interactive callers pass stdout; tests pass a byte buffer.
    pub fn render_buffered<W: Write>(&self, w: &mut W) -> Result<(), AppError> {
        if !self.ignore_height_limit {
            queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        // Header: title on colored background with the page number right-aligned
        let header_text = format!(" {}  {} ", self.title, self.page_number);
        queue!(
            w,
            SetBackgroundColor(header_bg()),
            SetForegroundColor(header_fg()),
            Print(&header_text),
            ResetColor,
            Print("\r\n"),
            SetForegroundColor(subheader_fg()),
            Print(format!(" {}", self.subheader)),
            ResetColor,
            Print("\r\n\r\n"),
        )?;

        let entries: Vec<&SeasonRow> = self
            .rows
            .iter()
            .filter(|row| matches!(row, SeasonRow::SeasonEntry { .. }))
            .collect();
        let selected_pos = entries
            .iter()
            .position(|row| matches!(row, SeasonRow::SeasonEntry { selected: true, .. }));
        let (window_start, window_end) =
            visible_window(entries.len(), selected_pos.unwrap_or(0), self.list_capacity());

        for (pos, row) in entries.iter().enumerate() {
            if pos < window_start || pos >= window_end {
                continue;
            }
            if let SeasonRow::SeasonEntry { name, selected } = row {
                if *selected {
                    queue!(
                        w,
                        SetForegroundColor(selected_fg()),
                        Print(format!("▶{name}")),
                        ResetColor,
                        Print("\r\n"),
                    )?;
                } else {
                    queue!(
                        w,
                        SetForegroundColor(text_fg()),
                        Print(format!(" {name}")),
                        ResetColor,
                        Print("\r\n"),
                    )?;
                }
            }
        }

        for row in &self.rows {
            match row {
                SeasonRow::SeasonEntry { .. } => {}
                SeasonRow::SectionHeader(text) => {
                    queue!(
                        w,
                        Print("\r\n"),
                        SetForegroundColor(subheader_fg()),
                        Print(format!(" {text}")),
                        ResetColor,
                        Print("\r\n"),
                    )?;
                }
                SeasonRow::RangeLine(text) => {
                    queue!(
                        w,
                        SetForegroundColor(text_fg()),
                        Print(format!("  {text}")),
                        ResetColor,
                        Print("\r\n"),
                    )?;
                }
                SeasonRow::RemainingLine(text) => {
                    queue!(
                        w,
                        SetForegroundColor(remaining_fg()),
                        Print(format!("  {text}")),
                        ResetColor,
                        Print("\r\n"),
                    )?;
                }
                SeasonRow::ErrorMessage(text) => {
                    queue!(
                        w,
                        SetForegroundColor(error_fg()),
                        Print(format!(" {text}")),
                        ResetColor,
                        Print("\r\n"),
                    )?;
                }
            }
        }

        if self.show_footer {
            queue!(
                w,
                Print("\r\n"),
                SetForegroundColor(selected_fg()),
                Print(" q=終了  r=更新  ↑/↓=シーズン選択"),
                ResetColor,
                Print("\r\n"),
            )?;
        }

        w.flush()?;
        Ok(())
    }
}

/// Computes the half-open window of list positions to draw so the selection
/// stays visible within `capacity` rows.
fn visible_window(len: usize, selected: usize, capacity: usize) -> (usize, usize) {
    if len <= capacity {
        return (0, len);
    }
    // Keep the selection centered where possible
    let half = capacity / 2;
    let start = selected.saturating_sub(half).min(len - capacity);
    (start, start + capacity)
}
