use rspotify::{
    model::{PlayableId, PlaylistId, SearchResult, SearchType, UserId},
    prelude::*,
    scopes, AuthCodeSpotify, Credentials, OAuth, Token,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::extractor::TrackQuery;
use crate::spotify::models::{CreatedPlaylist, ResolvedTrack};

/// The only permission this tool needs: creating and filling a public
/// playlist under the configured account.
const SPOTIFY_SCOPE: &str = "playlist-modify-public";

pub struct SpotifyClient {
    client: AuthCodeSpotify,
    user_id: UserId<'static>,
}

impl SpotifyClient {
    /// Build an authenticated client from a pre-obtained refresh token.
    /// No interactive authorization flow; an invalid or revoked token
    /// fails the run here, before any search is issued.
    pub async fn new(config: &Config) -> Result<Self> {
        let creds = Credentials::new(&config.spotify_client_id, &config.spotify_client_secret);

        let oauth = OAuth {
            redirect_uri: config.spotify_redirect_uri.clone(),
            scopes: scopes!(SPOTIFY_SCOPE),
            ..Default::default()
        };

        let client = AuthCodeSpotify::new(creds, oauth);

        let seed = Token {
            refresh_token: Some(config.spotify_refresh_token.clone()),
            ..Default::default()
        };

        *client
            .token
            .lock()
            .await
            .map_err(|_| AppError::Auth("Spotify token store is poisoned".into()))? = Some(seed);

        client.refresh_token().await?;

        let user_id = UserId::from_id(config.spotify_username.clone())?;

        info!("Authenticated with Spotify as user: {}", user_id.id());

        Ok(Self { client, user_id })
    }

    /// Resolve one query to a track id. Empty result sets come back as
    /// `Ok(None)`; API failures propagate instead of being swallowed into
    /// the not-found path.
    pub async fn resolve_track(&self, query: &TrackQuery) -> Result<Option<ResolvedTrack>> {
        let result = self
            .client
            .search(&query.0, SearchType::Track, None, None, Some(1), None)
            .await?;

        let SearchResult::Tracks(page) = result else {
            warn!("Search returned a non-track result set for: {}", query);
            return Ok(None);
        };

        let Some(track) = page.items.into_iter().next() else {
            debug!("No search results for: {}", query);
            return Ok(None);
        };

        // Local tracks carry no id and cannot be added to a playlist.
        let Some(id) = track.id else {
            debug!("First result for {} has no track id, treating as unresolved", query);
            return Ok(None);
        };

        Ok(Some(ResolvedTrack {
            id,
            name: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
        }))
    }

    pub async fn create_playlist(&self, title: &str) -> Result<CreatedPlaylist> {
        let playlist = self
            .client
            .user_playlist_create(self.user_id.as_ref(), title, Some(true), Some(false), None)
            .await?;

        info!("Created Spotify playlist: {}", title);

        Ok(CreatedPlaylist {
            id: playlist.id.id().to_string(),
            uri: playlist.id.uri(),
            name: playlist.name,
        })
    }

    /// Append every resolved track in one batch call. Called at most once
    /// per run, after the playlist exists.
    pub async fn add_tracks(
        &self,
        playlist: &CreatedPlaylist,
        tracks: &[ResolvedTrack],
    ) -> Result<()> {
        if tracks.is_empty() {
            return Ok(());
        }

        let playlist_id = PlaylistId::from_id(playlist.id.as_str())?;
        let items = tracks
            .iter()
            .map(|t| PlayableId::Track(t.id.as_ref()));

        self.client
            .playlist_add_items(playlist_id, items, None)
            .await?;

        info!("Added {} tracks to playlist {}", tracks.len(), playlist.name);
        Ok(())
    }
}
