//! A field binding that renders feedback as styled terminal lines.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use fieldguard::config::THEME_CLASS_PREFIX;
use fieldguard::{ErrorDisplay, Feedback, FieldBinding, Trigger};

/// Colors used for feedback, chosen by theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub success: Option<Color>,
    pub error: Option<Color>,
    pub muted: Option<Color>,
}

impl Palette {
    pub fn for_theme(theme: &str) -> Self {
        match theme {
            "minimal" => Self {
                success: None,
                error: None,
                muted: None,
            },
            "material" => Self {
                success: Some(Color::Rgb {
                    r: 0x4c,
                    g: 0xaf,
                    b: 0x50,
                }),
                error: Some(Color::Rgb {
                    r: 0xf4,
                    g: 0x43,
                    b: 0x36,
                }),
                muted: Some(Color::Rgb {
                    r: 0x9e,
                    g: 0x9e,
                    b: 0x9e,
                }),
            },
            _ => Self::default(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            success: Some(Color::Green),
            error: Some(Color::Red),
            muted: Some(Color::DarkGrey),
        }
    }
}

/// Field whose value is set by the host and whose feedback is written to `out`.
pub struct TerminalField<W: Write> {
    id: String,
    value: String,
    out: W,
    palette: Palette,
    listeners: Vec<Trigger>,
    quiet: bool,
}

impl<W: Write> TerminalField<W> {
    pub fn new(id: impl Into<String>, out: W) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            out,
            palette: Palette::default(),
            listeners: Vec::new(),
            quiet: false,
        }
    }

    /// Suppress all rendering, e.g. when results are printed as JSON.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn listeners(&self) -> &[Trigger] {
        &self.listeners
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    fn write_feedback(&mut self, feedback: &Feedback<'_>) -> io::Result<()> {
        let invalid = feedback.result.has_errors();
        let (symbol, color) = if invalid {
            ("✘", self.palette.error)
        } else {
            ("✔", self.palette.success)
        };

        write_colored(&mut self.out, color, &format!("{symbol} {}", self.id))?;
        if let Some(state) = feedback.aria_invalid() {
            let word = if state == "true" { "invalid" } else { "valid" };
            queue!(self.out, Print(format!(" ({word})")))?;
        }

        let visible = feedback.visible_error();
        if let (ErrorDisplay::Inline, Some(error)) = (feedback.error_display, visible) {
            queue!(self.out, Print(": "))?;
            write_colored(&mut self.out, self.palette.error, error)?;
        }
        queue!(self.out, Print("\n"))?;

        if let (ErrorDisplay::Below, Some(error)) = (feedback.error_display, visible) {
            write_colored(&mut self.out, self.palette.error, &format!("  {error}"))?;
            queue!(self.out, Print("\n"))?;
        }

        if feedback.described_by().is_some() {
            let errors = feedback.result.errors();
            for (index, error) in errors.iter().enumerate() {
                queue!(
                    self.out,
                    Print(format!("  [{}/{}] {error}\n", index + 1, errors.len()))
                )?;
            }
        }

        self.out.flush()
    }

    fn write_cleared(&mut self) -> io::Result<()> {
        write_colored(&mut self.out, self.palette.muted, &format!("○ {}", self.id))?;
        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }
}

fn write_colored<W: Write>(out: &mut W, color: Option<Color>, text: &str) -> io::Result<()> {
    match color {
        Some(color) => queue!(out, SetForegroundColor(color), Print(text), ResetColor),
        None => queue!(out, Print(text)),
    }
}

impl<W: Write> FieldBinding for TerminalField<W> {
    type Value = String;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn listen(&mut self, triggers: &[Trigger]) {
        log::debug!("Terminal field '{}' listening for {:?}", self.id, triggers);
        self.listeners = triggers.to_vec();
    }

    fn unlisten(&mut self) {
        log::debug!("Terminal field '{}' stopped listening", self.id);
        self.listeners.clear();
    }

    fn render_feedback(&mut self, feedback: &Feedback<'_>) {
        if self.quiet {
            return;
        }
        if let Err(e) = self.write_feedback(feedback) {
            log::warn!("Failed to render feedback for '{}': {}", self.id, e);
        }
    }

    fn clear_feedback(&mut self) {
        if self.quiet {
            return;
        }
        if let Err(e) = self.write_cleared() {
            log::warn!("Failed to clear feedback for '{}': {}", self.id, e);
        }
    }

    fn apply_theme(&mut self, class: &str) {
        let theme = class.strip_prefix(THEME_CLASS_PREFIX).unwrap_or(class);
        self.palette = Palette::for_theme(theme);
    }

    fn remove_theme(&mut self, _class: &str) {
        self.palette = Palette::default();
    }
}
