//! TVmaze API preflight check.

use super::CheckResult;
use crate::services::tvmaze::TvMazeClient;

/// Check that the API answers a search for the title.
pub async fn check(client: &TvMazeClient, title: &str) -> CheckResult {
    match client.search_shows(title).await {
        Some(items) if items.is_empty() => CheckResult::fail(
            "TVmaze API",
            &format!("no shows found for '{}'", title),
            "Check the spelling of --title",
        ),
        Some(items) => {
            let best = items
                .first()
                .map(|item| item.show.name.as_str())
                .unwrap_or_default();
            CheckResult::ok(
                "TVmaze API",
                &format!("connected ({} candidates, best: {})", items.len(), best),
            )
        }
        None => CheckResult::fail(
            "TVmaze API",
            "connection failed",
            "Check your network connection or MFO_API_BASE_URL",
        ),
    }
}
