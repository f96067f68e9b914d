pub mod client;
pub mod models;

pub use client::KexpClient;
pub use models::{Play, PlayHistory, MEDIA_PLAY};
