use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kexp2spotify::extractor::extract_queries;
use kexp2spotify::{Config, KexpClient, PlaylistBuilder};

#[derive(Parser)]
#[command(name = "kexp2spotify")]
#[command(about = "Snapshot KEXP's recently played tracks into a Spotify playlist")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the play history and create the playlist
    Create {
        /// Resolve tracks but create nothing on Spotify
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the songs currently in the station's play history
    History,

    /// Show setup guide
    Setup,
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Create { dry_run } => {
            create(dry_run).await?;
        }
        Commands::History => {
            show_history().await?;
        }
        Commands::Setup => {
            show_setup_guide();
        }
    }

    Ok(())
}

async fn create(dry_run: bool) -> Result<()> {
    println!("{}", "KEXP to Spotify Playlist Snapshot".cyan().bold());
    println!("{}", "=".repeat(50));

    if dry_run {
        println!("{}", "DRY RUN MODE - No playlist will be created".yellow());
    }

    let config = Config::from_env().context("Failed to load configuration")?;

    let missing = config.get_missing_config();
    if !missing.is_empty() {
        println!("{}", "Missing configuration:".red());
        for item in &missing {
            println!("   - {}", item);
        }
        println!(
            "\n{}",
            "Please copy .env.example to .env and fill in your credentials.".yellow()
        );
        std::process::exit(1);
    }

    let builder = PlaylistBuilder::new(&config)
        .await
        .context("Failed to initialize pipeline")?;

    builder.run(dry_run).await?;

    if !dry_run {
        println!("\n{}", "Snapshot completed!".green());
    } else {
        println!("\n{}", "Dry run completed - no changes made".yellow());
    }

    Ok(())
}

async fn show_history() -> Result<()> {
    println!("{}", "KEXP Play History".cyan().bold());
    println!("{}", "=".repeat(50));

    let config = Config::station_only_from_env();

    let kexp_client = KexpClient::new(&config);
    let history = kexp_client
        .fetch_history()
        .await
        .context("Failed to fetch play history")?;

    let queries = extract_queries(&history.results);

    if queries.is_empty() {
        println!("{}", "No songs in the current history window".yellow());
        return Ok(());
    }

    for (i, query) in queries.iter().enumerate() {
        println!("{:2}. {}", i + 1, query.to_string().green());
    }

    println!(
        "\n{}",
        format!(
            "{} songs ({} feed entries)",
            queries.len(),
            history.results.len()
        )
        .cyan()
    );

    Ok(())
}

fn show_setup_guide() {
    println!("{}", "KEXP to Spotify Setup Guide".cyan().bold());
    println!("{}", "=".repeat(50));

    println!("\n{}", "1. Spotify API Setup".yellow());
    println!("   - Go to https://developer.spotify.com/dashboard/");
    println!("   - Create a new app");
    println!("   - Copy your Client ID and Client Secret");
    println!("   - Add 'http://127.0.0.1:8080/callback' as a redirect URI");

    println!("\n{}", "2. Refresh Token".yellow());
    println!("   - Authorize your app once with the 'playlist-modify-public' scope");
    println!("   - Keep the refresh token from the token response");

    println!("\n{}", "3. Configuration".yellow());
    println!("   - Create a .env file with:");
    println!("     SPOTIFY_REFRESH_TOKEN=your_refresh_token");
    println!("     SPOTIFY_CLIENT_ID=your_spotify_client_id");
    println!("     SPOTIFY_CLIENT_SECRET=your_spotify_client_secret");
    println!("     SPOTIFY_USERNAME=your_spotify_username");
    println!("     SPOTIFY_REDIRECT_URI=http://127.0.0.1:8080/callback");

    println!("\n{}", "4. Usage".yellow());
    println!("   - kexp2spotify history            (to preview the current tracklist)");
    println!("   - kexp2spotify create --dry-run   (to test track resolution)");
    println!("   - kexp2spotify create             (to create the playlist)");

    println!("\n{}", "Ready to snapshot!".green());
}
