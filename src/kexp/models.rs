use serde::Deserialize;

/// Feed classification for an entry that is an actual song broadcast,
/// as opposed to an airbreak or commercial segment.
pub const MEDIA_PLAY: &str = "Media play";

#[derive(Debug, Clone, Deserialize)]
pub struct PlayHistory {
    pub results: Vec<Play>,
}

/// One entry from the KEXP play history feed. Airbreaks and commercial
/// entries come back with null artist/track fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Play {
    pub playtype: Option<PlayType>,
    pub artist: Option<Named>,
    pub track: Option<Named>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayType {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub name: String,
}

impl Play {
    pub fn is_media_play(&self) -> bool {
        self.playtype
            .as_ref()
            .is_some_and(|pt| pt.name == MEDIA_PLAY)
    }
}

#[cfg(test)]
impl Play {
    pub fn mock(playtype: &str, artist: &str, track: &str) -> Self {
        Self {
            playtype: Some(PlayType {
                name: playtype.to_string(),
            }),
            artist: Some(Named {
                name: artist.to_string(),
            }),
            track: Some(Named {
                name: track.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_with_airbreak_deserializes() {
        let body = r#"{
            "results": [
                {
                    "playtype": {"name": "Media play"},
                    "artist": {"name": "Mitski"},
                    "track": {"name": "First Love / Late Spring"}
                },
                {
                    "playtype": {"name": "Air break"},
                    "artist": null,
                    "track": null
                }
            ]
        }"#;

        let history: PlayHistory = serde_json::from_str(body).unwrap();
        assert_eq!(history.results.len(), 2);
        assert!(history.results[0].is_media_play());
        assert!(!history.results[1].is_media_play());
        assert!(history.results[1].artist.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = r#"{
            "results": [
                {
                    "playid": 12345,
                    "airdate": "2020-01-01T00:00:00Z",
                    "playtype": {"playtypeid": 1, "name": "Media play"},
                    "artist": {"artistid": 9, "name": "Low"},
                    "track": {"trackid": 7, "name": "Days Like These"}
                }
            ]
        }"#;

        let history: PlayHistory = serde_json::from_str(body).unwrap();
        assert_eq!(history.results[0].artist.as_ref().unwrap().name, "Low");
    }

    #[test]
    fn test_missing_playtype_is_not_media_play() {
        let play = Play {
            playtype: None,
            artist: None,
            track: None,
        };
        assert!(!play.is_media_play());
    }
}
