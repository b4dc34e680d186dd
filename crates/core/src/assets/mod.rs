use std::path::PathBuf;

use crate::{config::StudioConfig, LyricVizError, Result};

/// Files backing a session: the track to play and the lyrics to show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudioAssets {
    pub music_path: Option<PathBuf>,
    pub lyrics_text: Option<String>,
    pub display_name: String,
}

impl StudioAssets {
    /// An empty set of assets, as held before loading completes.
    pub fn pending(display_name: impl Into<String>) -> Self {
        Self {
            music_path: None,
            lyrics_text: None,
            display_name: display_name.into(),
        }
    }

    /// Reads the lyrics and checks that the music file is present.
    pub fn load(studio: &StudioConfig) -> Result<Self> {
        let lyrics_path = studio.lyrics_path();
        let lyrics_text = std::fs::read_to_string(&lyrics_path).map_err(|err| {
            LyricVizError::msg(format!(
                "failed to load lyrics from `{}`: {err}",
                lyrics_path.display()
            ))
        })?;

        let music_path = studio.music_path();
        if !music_path.is_file() {
            return Err(LyricVizError::msg(format!(
                "music file `{}` not found",
                music_path.display()
            )));
        }

        tracing::info!(
            lyrics = %lyrics_path.display(),
            music = %music_path.display(),
            "loaded studio resources"
        );

        Ok(Self {
            music_path: Some(music_path),
            lyrics_text: Some(lyrics_text),
            display_name: studio.display_name.clone(),
        })
    }

    pub fn files_ready(&self) -> bool {
        self.music_path.is_some() && self.lyrics_text.is_some()
    }
}
