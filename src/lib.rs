pub mod config;
pub mod error;
pub mod extractor;
pub mod kexp;
pub mod pipeline;
pub mod spotify;

pub use config::Config;
pub use error::{AppError, Result};
pub use extractor::TrackQuery;
pub use kexp::{KexpClient, Play, PlayHistory};
pub use pipeline::{PlaylistBuilder, RunReport};
pub use spotify::{CreatedPlaylist, ResolvedTrack, SpotifyClient};
