use chrono::{DateTime, Local};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::extractor::{extract_queries, TrackQuery};
use crate::kexp::KexpClient;
use crate::pipeline::report::RunReport;
use crate::spotify::{ResolvedTrack, SpotifyClient};

/// One forward pass: fetch the feed, resolve each song on Spotify, create
/// the dated playlist, append everything in a single batch.
pub struct PlaylistBuilder {
    kexp_client: KexpClient,
    spotify_client: SpotifyClient,
    station_name: String,
}

pub fn playlist_title(station_name: &str, now: DateTime<Local>) -> String {
    format!("{} - {}", station_name, now.format("%Y-%m-%d %H:%M"))
}

impl PlaylistBuilder {
    pub async fn new(config: &Config) -> Result<Self> {
        let kexp_client = KexpClient::new(config);
        let spotify_client = SpotifyClient::new(config).await?;

        Ok(Self {
            kexp_client,
            spotify_client,
            station_name: config.station_name.clone(),
        })
    }

    pub async fn run(&self, dry_run: bool) -> Result<RunReport> {
        let title = playlist_title(&self.station_name, Local::now());

        let history = self.kexp_client.fetch_history().await?;
        let queries = extract_queries(&history.results);

        info!(
            "Extracted {} song queries from {} feed entries",
            queries.len(),
            history.results.len()
        );

        let mut report = RunReport::new(title.clone(), history.results.len(), queries.len());
        let resolved = self.resolve_tracks(&queries, &mut report).await?;

        if dry_run {
            info!("Dry run, skipping playlist creation");
            self.print_summary(&report, &resolved, dry_run);
            return Ok(report);
        }

        if resolved.is_empty() {
            warn!("No tracks resolved, skipping playlist creation");
            self.print_summary(&report, &resolved, dry_run);
            return Ok(report);
        }

        let playlist = self.spotify_client.create_playlist(&title).await?;
        self.spotify_client.add_tracks(&playlist, &resolved).await?;
        report.playlist_uri = Some(playlist.uri);

        self.print_summary(&report, &resolved, dry_run);
        Ok(report)
    }

    async fn resolve_tracks(
        &self,
        queries: &[TrackQuery],
        report: &mut RunReport,
    ) -> Result<Vec<ResolvedTrack>> {
        let mut resolved = Vec::new();

        let pb = ProgressBar::new(queries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        for query in queries {
            pb.set_message(query.0.clone());

            match self.spotify_client.resolve_track(query).await? {
                Some(track) => {
                    report.record_resolved();
                    resolved.push(track);
                }
                None => {
                    pb.println(format!("No results for: {}", query));
                    report.record_unresolved(query.0.clone());
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(resolved)
    }

    fn print_summary(&self, report: &RunReport, resolved: &[ResolvedTrack], dry_run: bool) {
        println!();
        println!("{}", "=".repeat(60));
        println!("{}", "SNAPSHOT SUMMARY".bold());
        println!("{}", "=".repeat(60));
        println!("Feed entries fetched: {}", report.total_plays);
        println!("Songs extracted: {}", report.extracted_queries);
        println!("Resolved on Spotify: {}", report.resolved.to_string().green());
        println!("Unresolved: {}", report.unresolved().to_string().red());
        println!("Resolution rate: {:.1}%", report.resolution_rate());

        if !resolved.is_empty() {
            println!("\nTracks:");
            for track in resolved {
                println!("  {} - {}", track.artists.join(", "), track.name.green());
            }
        }

        if !report.unresolved_titles.is_empty() {
            println!("\nNot found on Spotify:");
            for title in &report.unresolved_titles {
                println!("  {}", title.yellow());
            }
        }

        match (&report.playlist_uri, dry_run) {
            (Some(uri), _) => {
                println!("\nPlaylist: {} ({})", report.playlist_title.cyan(), uri);
            }
            (None, true) => {
                println!(
                    "\nWould create playlist: {}",
                    report.playlist_title.yellow()
                );
            }
            (None, false) => {}
        }

        println!("{}", "=".repeat(60));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_playlist_title_format() {
        let when = Local.with_ymd_and_hms(2020, 3, 14, 15, 9, 26).unwrap();
        assert_eq!(playlist_title("KEXP", when), "KEXP - 2020-03-14 15:09");
    }

    #[test]
    fn test_playlist_title_uses_station_name() {
        let when = Local.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap();
        assert!(playlist_title("KEXP 90.3 FM", when).starts_with("KEXP 90.3 FM - "));
    }
}
