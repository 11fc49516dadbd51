//! Display name resolution and current-season selection

use chrono::{DateTime, Duration, Local, Utc};
use std::collections::HashMap;
use tracing::debug;

use crate::season_fetcher::models::Season;

/// Produces a new season list in which every child season with a resolvable
/// parent has its display name rewritten to `"{parent name} {child name}"`.
///
/// This is a pure transform: the input list is left untouched and list order
/// is preserved. Children whose parent uuid is not in the map keep their raw
/// name.
pub fn resolve_display_names(
    seasons: &[Season],
    parent_names: &HashMap<String, String>,
) -> Vec<Season> {
    seasons
        .iter()
        .map(|season| {
            let display_name = match season
                .parent_uuid
                .as_ref()
                .and_then(|uuid| parent_names.get(uuid))
            {
                Some(parent_name) => format!("{} {}", parent_name, season.display_name),
                None => season.display_name.clone(),
            };
            Season {
                display_name,
                ..season.clone()
            }
        })
        .collect()
}

/// Selects the currently active season by date-range containment.
///
/// The reference instant is one day before `now`; a season qualifies when
/// `start_time < reference < end_time` and it is an act (episode umbrellas
/// span their acts and must not win). Returns the first match in list order.
pub fn select_current_season(
    seasons: &[Season],
    now: DateTime<Local>,
) -> Option<&Season> {
    let reference: DateTime<Utc> = (now - Duration::days(1)).with_timezone(&Utc);

    let current = seasons
        .iter()
        .find(|season| season.is_act() && season.contains(reference));

    match current {
        Some(season) => debug!("Current season: {}", season.display_name),
        None => debug!("No current season for reference instant {reference}"),
    }
    current
}
