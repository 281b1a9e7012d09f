use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mystic_quest::{
    GameConfig, GameLoop, SaveSystem,
    input::ConsoleInput,
    music::BackgroundMusic,
    renderer::TextRenderer,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "A turn-based terminal adventure")]
struct Cli {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Save file location (overrides the config).
    #[arg(long)]
    save_file: Option<PathBuf>,
    /// Skip the background music.
    #[arg(long)]
    no_music: bool,
    /// Length of the background track in seconds.
    #[arg(long)]
    music_secs: Option<u64>,
    /// Plain, unstyled output.
    #[arg(long)]
    no_color: bool,
    /// Tracing filter, e.g. `info` or `save=debug`.
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    /// Settings from the config file and flags. Problems with either are
    /// returned as warnings; the game still starts on the defaults.
    fn into_config(self) -> (GameConfig, Vec<anyhow::Error>) {
        let mut warnings = Vec::new();
        let mut config = match &self.config {
            Some(path) => {
                let (config, err) = GameConfig::from_path_or_default(path);
                warnings.extend(err);
                config
            }
            None => GameConfig::default(),
        };
        if let Some(save_file) = self.save_file {
            config.save_file = save_file;
        }
        if self.no_music {
            config.music.enabled = false;
        }
        if let Some(secs) = self.music_secs {
            config.music.duration_secs = secs;
        }
        if self.no_color {
            config.color = false;
        }
        if self.log.is_some() {
            config.log_filter = self.log;
        }
        if let Some(err) = config.sanitize() {
            warnings.push(anyhow::Error::new(err).context("using the default save file"));
        }
        (config, warnings)
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn main() -> Result<()> {
    let (config, warnings) = Cli::parse().into_config();
    init_tracing(config.log_filter.as_deref());
    for warning in &warnings {
        eprintln!("Warning: {warning:#}");
    }
    tracing::debug!(?config, "configuration loaded");

    // Joined on every way out of main, after the session is over.
    let _music = config
        .music
        .track()
        .and_then(|track| match BackgroundMusic::spawn(track, io::stdout()) {
            Ok(music) => Some(music),
            Err(e) => {
                tracing::warn!(error = %e, "failed to start background music");
                None
            }
        })
        .map(|music| scopeguard::guard(music, BackgroundMusic::join));

    let saves = SaveSystem::new(&config.save_file);
    let renderer = TextRenderer::console(config.color);
    let mut game = GameLoop::new(ConsoleInput::stdin(), renderer, saves);

    let end = game.run()?;
    tracing::info!(?end, "session over");
    Ok(())
}
