//! Filename to episode matcher.
//!
//! Every episode gets a pattern set testing, case-sensitively and unanchored,
//! for its season token (`s01`), its number token (`e05`) or its literal
//! title. A filename matches an episode when any of the three is found.

use crate::models::config::MatchPolicy;
use crate::models::episode::Episode;
use crate::models::plan::MatchEntry;
use crate::Result;
use regex::RegexSet;

/// Compiled patterns for one episode.
#[derive(Debug)]
struct EpisodePattern {
    episode: Episode,
    tokens: RegexSet,
}

impl EpisodePattern {
    fn new(episode: &Episode) -> Result<Self> {
        let tokens = RegexSet::new([
            format!("s{:02}", episode.season),
            format!("e{:02}", episode.number),
            regex::escape(&episode.name),
        ])?;

        Ok(Self {
            episode: episode.clone(),
            tokens,
        })
    }

    /// Number of tokens found in the filename.
    fn score(&self, filename: &str) -> usize {
        self.tokens.matches(filename).iter().count()
    }
}

/// Pairs filenames with episodes.
#[derive(Debug)]
pub struct EpisodeMatcher {
    patterns: Vec<EpisodePattern>,
    policy: MatchPolicy,
}

impl EpisodeMatcher {
    /// Compile patterns for every episode, keeping list order.
    pub fn new(episodes: &[Episode], policy: MatchPolicy) -> Result<Self> {
        let patterns = episodes
            .iter()
            .map(EpisodePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns, policy })
    }

    /// Episode matched by a single filename, if any.
    pub fn match_file(&self, filename: &str) -> Option<&Episode> {
        let mut candidates = self
            .patterns
            .iter()
            .map(|p| (p, p.score(filename)))
            .filter(|(_, score)| *score > 0);

        let winner = match self.policy {
            MatchPolicy::First => candidates.next(),
            MatchPolicy::Last => candidates.last(),
            // max_by_key returns the last of equal maxima.
            MatchPolicy::Best => candidates.max_by_key(|(_, score)| *score),
        };

        winner.map(|(p, _)| &p.episode)
    }

    /// Match every filename; unmatched filenames are left out.
    ///
    /// The result follows `filenames` order and holds each filename at most once.
    pub fn match_files(&self, filenames: &[String]) -> Vec<MatchEntry> {
        let mut matches: Vec<MatchEntry> = Vec::new();

        for filename in filenames {
            if matches.iter().any(|m| &m.filename == filename) {
                continue;
            }
            match self.match_file(filename) {
                Some(episode) => {
                    tracing::debug!(
                        "Matched {} -> S{:02}E{:02} {}",
                        filename,
                        episode.season,
                        episode.number,
                        episode.name
                    );
                    matches.push(MatchEntry {
                        filename: filename.clone(),
                        episode: episode.clone(),
                    });
                }
                None => tracing::debug!("No episode matches {}", filename),
            }
        }

        matches
    }
}

/// Match filenames against episodes with the given policy.
pub fn map_files_to_episodes(
    filenames: &[String],
    episodes: &[Episode],
    policy: MatchPolicy,
) -> Result<Vec<MatchEntry>> {
    Ok(EpisodeMatcher::new(episodes, policy)?.match_files(filenames))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn two_episodes() -> Vec<Episode> {
        vec![
            Episode::new(1, 1, "Pilot", "2019-03-01"),
            Episode::new(1, 2, "Next", "2019-03-08"),
        ]
    }

    #[test]
    fn test_last_match_wins() {
        // Both files contain "s01", which every season 1 episode matches.
        let files = owned(&["show.s01e01.mkv", "show.s01e02.mkv"]);
        let matches = map_files_to_episodes(&files, &two_episodes(), MatchPolicy::Last).unwrap();

        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.episode.name == "Next"));
    }

    #[test]
    fn test_first_match_wins() {
        let files = owned(&["show.s01e02.mkv"]);
        let matches = map_files_to_episodes(&files, &two_episodes(), MatchPolicy::First).unwrap();

        assert_eq!(matches[0].episode.name, "Pilot");
    }

    #[test]
    fn test_best_match_prefers_most_tokens() {
        let files = owned(&["show.s01e01.mkv", "show.s01e02.mkv"]);
        let matches = map_files_to_episodes(&files, &two_episodes(), MatchPolicy::Best).unwrap();

        assert_eq!(matches[0].episode.name, "Pilot");
        assert_eq!(matches[1].episode.name, "Next");
    }

    #[test]
    fn test_title_match_is_literal_and_case_sensitive() {
        let episodes = vec![Episode::new(4, 9, "What? (Part 1)", "2020-01-01")];
        let matcher = EpisodeMatcher::new(&episodes, MatchPolicy::Last).unwrap();

        assert!(matcher.match_file("Show - What? (Part 1).mkv").is_some());
        assert!(matcher.match_file("Show - what? (part 1).mkv").is_none());
        assert!(matcher.match_file("Show - S04E09.mkv").is_none());
    }

    #[test]
    fn test_unmatched_files_are_absent() {
        let files = owned(&["holiday.mkv", "show.s01e01.mkv"]);
        let matches = map_files_to_episodes(&files, &two_episodes(), MatchPolicy::Last).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].filename, "show.s01e01.mkv");
    }

    #[test]
    fn test_duplicate_filenames_kept_once() {
        let files = owned(&["a.s01.mkv", "a.s01.mkv"]);
        let matches = map_files_to_episodes(&files, &two_episodes(), MatchPolicy::Last).unwrap();

        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_matching_is_repeatable() {
        let files = owned(&["show.s01e01.mkv", "Next.mkv", "other.mkv"]);
        let matcher = EpisodeMatcher::new(&two_episodes(), MatchPolicy::Last).unwrap();

        assert_eq!(matcher.match_files(&files), matcher.match_files(&files));
    }

    #[test]
    fn test_empty_episode_list_matches_nothing() {
        let files = owned(&["show.s01e01.mkv"]);
        assert!(map_files_to_episodes(&files, &[], MatchPolicy::Last)
            .unwrap()
            .is_empty());
    }
}
