use tracing::debug;

use crate::kexp::Play;

/// Substrings known to hurt Spotify search relevance, stripped from every
/// query. Non-exhaustive on purpose; extend as bad queries show up.
const SEARCH_BREAKING: &[&str] = &["feat", "&"];

/// A cleaned "artist track" search string built from one media play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackQuery(pub String);

impl std::fmt::Display for TrackQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Turn the raw feed into search queries, feed order preserved.
/// Keeps media plays only; airbreaks and commercials are dropped, as are
/// plays missing an artist or track name.
pub fn extract_queries(plays: &[Play]) -> Vec<TrackQuery> {
    let mut queries = Vec::new();

    for play in plays {
        if !play.is_media_play() {
            continue;
        }

        let (Some(artist), Some(track)) = (&play.artist, &play.track) else {
            debug!("Skipping media play with missing artist or track name");
            continue;
        };

        queries.push(TrackQuery(clean_query(&format!(
            "{} {}",
            artist.name, track.name
        ))));
    }

    queries
}

/// Strip the search-breaking substrings and collapse the whitespace
/// left behind.
pub fn clean_query(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for pattern in SEARCH_BREAKING {
        cleaned = cleaned.replace(pattern, "");
    }

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kexp::{Play, MEDIA_PLAY};

    #[test]
    fn test_only_media_plays_extracted() {
        let plays = vec![
            Play::mock(MEDIA_PLAY, "Nirvana", "Lithium"),
            Play::mock("Commercial break", "", ""),
            Play::mock(MEDIA_PLAY, "Sleater-Kinney", "Jumpers"),
            Play::mock(MEDIA_PLAY, "Built to Spill", "Carry the Zero"),
        ];

        let queries = extract_queries(&plays);

        assert_eq!(queries.len(), 3);
        assert_eq!(queries[0].0, "Nirvana Lithium");
        assert_eq!(queries[1].0, "Sleater-Kinney Jumpers");
        assert_eq!(queries[2].0, "Built to Spill Carry the Zero");
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let plays = vec![
            Play::mock(MEDIA_PLAY, "Beach House", "Myth"),
            Play::mock("Air break", "", ""),
        ];

        assert!(extract_queries(&plays).len() <= plays.len());
    }

    #[test]
    fn test_search_breaking_substrings_removed() {
        let plays = vec![Play::mock(
            MEDIA_PLAY,
            "Run The Jewels feat. Zack de la Rocha",
            "Close Your Eyes & Count to Fuck",
        )];

        let queries = extract_queries(&plays);

        assert_eq!(queries.len(), 1);
        assert!(!queries[0].0.contains("feat"));
        assert!(!queries[0].0.contains('&'));
    }

    #[test]
    fn test_clean_query_collapses_whitespace() {
        assert_eq!(
            clean_query("She & Him Why Do You Let Me Stay Here?"),
            "She Him Why Do You Let Me Stay Here?"
        );
        assert_eq!(clean_query("A feat B"), "A B");
    }

    #[test]
    fn test_play_without_track_name_skipped() {
        let mut play = Play::mock(MEDIA_PLAY, "Unknown Artist", "x");
        play.track = None;

        assert!(extract_queries(&[play]).is_empty());
    }
}
