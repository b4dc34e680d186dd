use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use codelyric_core::{
    lyrics, project, AppConfig, ClockedPlayback, EditorFrame, Session, StudioAssets, StudioConfig,
    TimeSource,
};
use tracing_subscriber::EnvFilter;

fn main() -> codelyric_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { lyrics, json } => run_parse(&lyrics, json),
        Commands::View { lyrics, at, name } => run_view(&lyrics, at, &name),
        Commands::Play { config, studio } => run_play(config.as_deref(), studio),
    }
}

fn run_parse(path: &Path, json: bool) -> codelyric_core::Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let entries = lyrics::parse(&raw);
    tracing::info!(path = %path.display(), entries = entries.len(), "parsed lyrics file");

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!("{:>9.3}  {:<7}  {}", entry.time, entry.category, entry.text);
    }
    Ok(())
}

fn run_view(path: &Path, at: f64, name: &str) -> codelyric_core::Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let entries = lyrics::parse(&raw);
    let view = project(&entries, at);
    tracing::debug!(at, active = ?view.active, "projected timeline");

    println!("{}", EditorFrame::render(&view, name));
    Ok(())
}

fn run_play(config_path: Option<&Path>, studio: Option<PathBuf>) -> codelyric_core::Result<()> {
    let mut config = match config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(dir) = studio {
        config.studio.dir = dir;
    }
    config.validate()?;

    let Some(mut session) = load_session(&config.studio) else {
        return Ok(());
    };
    session.start_experience()?;

    thread::sleep(Duration::from_millis(config.playback.opening_delay_ms));
    session.finish_opening();

    let end_of_lyrics = session
        .entries()
        .last()
        .map(|entry| entry.time)
        .unwrap_or_default()
        + config.playback.tail_seconds;
    let playback = ClockedPlayback::start(Some(end_of_lyrics));
    let tick = Duration::from_millis(config.playback.tick_ms);
    tracing::info!(until = end_of_lyrics, "playback started");

    let mut last_active = None;
    let mut first_frame = true;
    loop {
        let name = session.display_name().to_string();
        let view = session.handle_time_update(playback.current_time(), playback.duration());
        if first_frame || view.active != last_active {
            last_active = view.active;
            first_frame = false;
            println!("{}\n", EditorFrame::render(&view, &name));
        }

        if playback.finished() {
            break;
        }
        thread::sleep(tick);
    }

    tracing::info!("playback finished");
    Ok(())
}

/// Loads the studio into a ready session. A loading failure is logged once
/// and leaves nothing to play.
fn load_session(studio: &StudioConfig) -> Option<Session> {
    match StudioAssets::load(studio) {
        Ok(assets) => Some(Session::load(assets)),
        Err(err) => {
            tracing::error!(%err, "error loading resources");
            None
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play lyrics as code being typed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the timed entries found in a lyrics file.
    Parse {
        /// Path to a `[MM:SS.ff]text` lyrics file.
        lyrics: PathBuf,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Render the editor as it looks at one point in the track.
    View {
        lyrics: PathBuf,
        /// Playback position in seconds.
        #[arg(long)]
        at: f64,
        /// File name shown in the editor chrome.
        #[arg(long, default_value = "app.ts")]
        name: String,
    },
    /// Load a studio folder and play its lyrics in real time.
    Play {
        /// Optional JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the studio directory from the configuration.
        #[arg(short, long)]
        studio: Option<PathBuf>,
    },
}
