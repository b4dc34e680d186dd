use serde::{Deserialize, Serialize};

use crate::{lyrics, project, LyricVizError, Projection, Result, StudioAssets, TimedEntry};

/// Which screen the visualiser is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    Desktop,
    OpeningEditor,
    Coding,
}

/// One viewing of a track: parsed lyrics plus the last reported playback
/// position.
#[derive(Debug, Clone)]
pub struct Session {
    assets: StudioAssets,
    entries: Vec<TimedEntry>,
    state: AppState,
    current_time: f64,
    duration: Option<f64>,
}

impl Session {
    /// Creates a session, parsing the lyrics once if they are loaded.
    pub fn load(assets: StudioAssets) -> Self {
        let entries = assets
            .lyrics_text
            .as_deref()
            .map(lyrics::parse)
            .unwrap_or_default();

        tracing::debug!(
            entries = entries.len(),
            ready = assets.files_ready(),
            "session created"
        );

        Self {
            assets,
            entries,
            state: AppState::Desktop,
            current_time: 0.0,
            duration: None,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn files_ready(&self) -> bool {
        self.assets.files_ready()
    }

    pub fn entries(&self) -> &[TimedEntry] {
        &self.entries
    }

    pub fn display_name(&self) -> &str {
        &self.assets.display_name
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Leaves the desktop and starts opening the editor.
    ///
    /// Calling this again once the editor is opening or open does nothing.
    pub fn start_experience(&mut self) -> Result<()> {
        if !self.files_ready() {
            return Err(LyricVizError::NotReady);
        }
        if self.state == AppState::Desktop {
            tracing::info!(file = %self.assets.display_name, "opening editor");
            self.state = AppState::OpeningEditor;
        }
        Ok(())
    }

    /// Completes the opening transition; playback may start afterwards.
    pub fn finish_opening(&mut self) {
        if self.state == AppState::OpeningEditor {
            self.state = AppState::Coding;
        }
    }

    /// Records a time update from the playback source and returns the view
    /// for that position.
    pub fn handle_time_update(&mut self, current_time: f64, duration: Option<f64>) -> Projection<'_> {
        self.current_time = current_time;
        self.duration = duration;
        self.projection()
    }

    /// The view at the last reported time.
    pub fn projection(&self) -> Projection<'_> {
        project(&self.entries, self.current_time)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn ready_assets(lyrics: &str) -> StudioAssets {
        StudioAssets {
            music_path: Some(PathBuf::from("studio/music.mp3")),
            lyrics_text: Some(lyrics.to_string()),
            display_name: "song.ts".to_string(),
        }
    }

    #[test]
    fn refuses_to_start_without_files() {
        let mut session = Session::load(StudioAssets::pending("song.ts"));

        assert!(matches!(
            session.start_experience(),
            Err(LyricVizError::NotReady)
        ));
        assert_eq!(session.state(), AppState::Desktop);
        assert!(session.entries().is_empty());
    }

    #[test]
    fn walks_through_states() {
        let mut session = Session::load(ready_assets("[00:01.00]a"));
        session.finish_opening();
        assert_eq!(session.state(), AppState::Desktop);

        session.start_experience().unwrap();
        assert_eq!(session.state(), AppState::OpeningEditor);

        session.finish_opening();
        assert_eq!(session.state(), AppState::Coding);

        session.start_experience().unwrap();
        assert_eq!(session.state(), AppState::Coding);
    }

    #[test]
    fn time_updates_drive_the_projection() {
        let mut session = Session::load(ready_assets(
            "[00:01.00]one\n[00:02.00]two\n[00:03.00]three",
        ));

        let view = session.handle_time_update(2.5, Some(180.0));
        assert_eq!(view.visible.len(), 2);
        assert_eq!(view.active, Some(1));
        assert_eq!(session.duration(), Some(180.0));

        let view = session.handle_time_update(0.2, Some(180.0));
        assert_eq!(view.active, None);
        assert_eq!(session.current_time(), 0.2);
    }
}
