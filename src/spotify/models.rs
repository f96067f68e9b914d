use rspotify::model::TrackId;
use serde::{Deserialize, Serialize};

/// A Spotify track matched to one extracted query. The id is what ends up
/// in the playlist; name and artists are kept for the summary output.
#[derive(Debug, Clone)]
pub struct ResolvedTrack {
    pub id: TrackId<'static>,
    pub name: String,
    pub artists: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedPlaylist {
    pub id: String,
    pub uri: String,
    pub name: String,
}
