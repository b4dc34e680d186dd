use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{LyricVizError, Result};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub studio: StudioConfig,
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Reads a JSON configuration file. Sections absent from the file keep
    /// their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.playback.tick_ms == 0 {
            return Err(LyricVizError::InvalidInput("tick_ms must be positive"));
        }
        let tail = self.playback.tail_seconds;
        if !tail.is_finite() || tail < 0.0 {
            return Err(LyricVizError::InvalidInput(
                "tail_seconds must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Where the lyrics and music for a session live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub dir: PathBuf,
    pub lyrics_file: String,
    pub music_file: String,
    /// File name shown in the editor tab and breadcrumb.
    pub display_name: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("studio"),
            lyrics_file: "lyrics.lrc".to_string(),
            music_file: "music.mp3".to_string(),
            display_name: "Beginning_To_Understand.ts".to_string(),
        }
    }
}

impl StudioConfig {
    pub fn lyrics_path(&self) -> PathBuf {
        self.dir.join(&self.lyrics_file)
    }

    pub fn music_path(&self) -> PathBuf {
        self.dir.join(&self.music_file)
    }
}

/// Timing knobs for simulated playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Pause between opening the editor and starting playback.
    pub opening_delay_ms: u64,
    /// Interval between time updates.
    pub tick_ms: u64,
    /// How long playback runs past the final entry when no duration is known.
    pub tail_seconds: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            opening_delay_ms: 2_000,
            tick_ms: 250,
            tail_seconds: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "playback": { "tick_ms": 100 } }"#).unwrap();

        assert_eq!(config.playback.tick_ms, 100);
        assert_eq!(config.playback.opening_delay_ms, 2_000);
        assert_eq!(config.studio, StudioConfig::default());
    }

    #[test]
    fn rejects_zero_tick() {
        let mut config = AppConfig::default();
        config.playback.tick_ms = 0;

        assert!(matches!(
            config.validate(),
            Err(LyricVizError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_negative_tail() {
        let mut config = AppConfig::default();
        config.playback.tail_seconds = -1.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn studio_paths_join_directory() {
        let studio = StudioConfig::default();
        assert_eq!(studio.lyrics_path(), PathBuf::from("studio/lyrics.lrc"));
        assert_eq!(studio.music_path(), PathBuf::from("studio/music.mp3"));
    }
}
