//! Core library for the Codelyric visualiser.
//!
//! A synchronised lyrics file is parsed into timed entries, each rendered as a
//! fake line of source code. As playback advances, the entries whose time has
//! passed are revealed in an editor-style view with the latest one
//! highlighted. Audio output and graphical chrome live outside this crate and
//! talk to it through [`TimeSource`] and [`Projection`].

pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod render;
pub mod session;
pub mod timeline;

pub use assets::StudioAssets;
pub use audio::{ClockedPlayback, TimeSource};
pub use config::{AppConfig, PlaybackConfig, StudioConfig};
pub use error::{LyricVizError, Result};
pub use lyrics::{parse, Category, CodeTemplate, TimedEntry};
pub use render::EditorFrame;
pub use session::{AppState, Session};
pub use timeline::{project, PlaybackClock, Projection};
