//! Terminal rendering of the Markdown produced by `pace-core`.
//!
//! Rich output styles inline Markdown with termimad and keeps the `#` of
//! headers visible, colored blue. Plain output passes the text through.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_COLOR: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    fn write_to(&self, out: &mut impl Write, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return out.write_all(markdown.as_bytes());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{HEADER_COLOR}{line}{RESET}")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
