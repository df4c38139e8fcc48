//! Episode filename generator.

use crate::models::episode::Episode;

/// Characters that are not allowed in filenames on common platforms.
const UNSAFE_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Generate the canonical episode name (without extension).
///
/// Format: `S${season2} E${number2} - ${title}`. Numbers are padded to two
/// digits, longer numbers are kept as is.
pub fn generate_episode_name(episode: &Episode) -> String {
    format!(
        "S{:02} E{:02} - {}",
        episode.season,
        episode.number,
        sanitize_filename(&episode.name)
    )
}

/// Generate canonical names for a list of episodes.
pub fn generate_episode_names(episodes: &[Episode]) -> Vec<String> {
    episodes.iter().map(generate_episode_name).collect()
}

/// Strip filesystem-unsafe characters.
pub fn sanitize_filename(s: &str) -> String {
    s.chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect()
}
