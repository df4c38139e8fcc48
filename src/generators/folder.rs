//! Season folder name generator.

use crate::models::episode::Episode;
use crate::Result;
use chrono::{Datelike, NaiveDate};

/// Calendar year of an episode's airdate.
fn airdate_year(episode: &Episode) -> Result<i32> {
    NaiveDate::parse_from_str(&episode.airdate, "%Y-%m-%d")
        .map(|date| date.year())
        .map_err(|_| crate::Error::InvalidAirdate {
            episode: episode.name.clone(),
            airdate: episode.airdate.clone(),
        })
}

/// Generate a season folder name.
///
/// Format: `Season ${season2} (${year})`, or `Season ${season2} (${first}-${last})`
/// when the first and last episode in list order aired in different years.
pub fn generate_season_name(season: u32, season_episodes: &[Episode]) -> Result<String> {
    let (Some(first), Some(last)) = (season_episodes.first(), season_episodes.last()) else {
        return Err(crate::Error::EmptySeason(season));
    };

    let first_year = airdate_year(first)?;
    let last_year = airdate_year(last)?;

    if first_year == last_year {
        Ok(format!("Season {:02} ({})", season, first_year))
    } else {
        Ok(format!("Season {:02} ({}-{})", season, first_year, last_year))
    }
}

/// Generate the season folder name for every episode in the list.
///
/// Each name is computed from the episodes of the same season within
/// `episodes` itself, in list order.
pub fn generate_season_names(episodes: &[Episode]) -> Result<Vec<String>> {
    episodes
        .iter()
        .map(|episode| {
            let season_episodes: Vec<Episode> = episodes
                .iter()
                .filter(|e| e.season == episode.season)
                .cloned()
                .collect();
            generate_season_name(episode.season, &season_episodes)
        })
        .collect()
}
