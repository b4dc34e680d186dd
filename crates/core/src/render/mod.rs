use std::fmt::Write as _;

use crate::Projection;

const FALLBACK_FILE_NAME: &str = "app.ts";
const ACTIVE_MARKER: char = '▌';
const CURSOR: char = '█';

/// Plain-text rendition of the code editor at one playback position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorFrame {
    text: String,
}

impl EditorFrame {
    pub fn render(projection: &Projection<'_>, file_name: &str) -> Self {
        let file_name = if file_name.is_empty() {
            FALLBACK_FILE_NAME
        } else {
            file_name
        };

        let mut text = String::new();
        let _ = writeln!(text, "● ● ●  {file_name} - Visual Studio Code");
        let _ = writeln!(text, "src > components > {file_name}");

        let mut line_number = 1;
        for (index, entry) in projection.visible.iter().enumerate() {
            let marker = if projection.active == Some(index) {
                ACTIVE_MARKER
            } else {
                ' '
            };
            for (offset, code_line) in entry.snippet.lines().enumerate() {
                let gutter = if offset == 0 { marker } else { ' ' };
                let _ = writeln!(text, "{line_number:>4} {gutter} {code_line}");
                line_number += 1;
            }
        }
        let _ = writeln!(text, "{line_number:>4}   {CURSOR}");

        let _ = write!(
            text,
            "main*  0 errors, 0 warnings  Ln {}, Col 1  UTF-8",
            projection.visible.len() + 1
        );

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for EditorFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
