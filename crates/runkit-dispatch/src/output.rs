//! Output sink for runnables and dispatch diagnostics.
//!
//! [`OutputSink`] is the only way runnables talk to the user. Lines carry an
//! optional foreground and background colour ([`LineStyle`]); whether the
//! colour is actually emitted is the sink's decision.

use std::cell::RefCell;
use std::io;

use console::{Color, Style, Term};

/// Foreground/background colour pair applied to a whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl LineStyle {
    /// No styling.
    pub const fn plain() -> Self {
        Self { fg: None, bg: None }
    }

    /// Foreground colour only.
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
        }
    }

    /// Sets the background colour.
    pub fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }

    /// Applies the style to `text`, forcing ANSI codes when `styled` is true
    /// and dropping them otherwise.
    pub fn paint(&self, text: &str, styled: bool) -> String {
        if !styled || self.is_plain() {
            return text.to_string();
        }
        let mut style = Style::new().force_styling(true);
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style.apply_to(text).to_string()
    }
}

/// Which standard stream a line went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Line-oriented writer used by runnables and the dispatcher.
pub trait OutputSink {
    /// Writes a line to standard output.
    fn write_line(&self, text: &str, style: LineStyle) -> io::Result<()>;

    /// Writes a line to standard error.
    fn error_line(&self, text: &str, style: LineStyle) -> io::Result<()>;
}

/// Colour policy for [`TermSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Style when the stream is a colour-capable terminal.
    #[default]
    Auto,
    /// Always emit ANSI codes.
    Always,
    /// Never emit ANSI codes.
    Never,
}

/// [`OutputSink`] backed by the process's stdout and stderr.
#[derive(Debug, Clone)]
pub struct TermSink {
    stdout: Term,
    stderr: Term,
    colors: ColorChoice,
}

impl TermSink {
    pub fn new(colors: ColorChoice) -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            colors,
        }
    }

    fn styled(&self, term: &Term) -> bool {
        match self.colors {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => term.features().colors_supported(),
        }
    }
}

impl Default for TermSink {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

impl OutputSink for TermSink {
    fn write_line(&self, text: &str, style: LineStyle) -> io::Result<()> {
        self.stdout
            .write_line(&style.paint(text, self.styled(&self.stdout)))
    }

    fn error_line(&self, text: &str, style: LineStyle) -> io::Result<()> {
        self.stderr
            .write_line(&style.paint(text, self.styled(&self.stderr)))
    }
}

/// A line captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub stream: Stream,
    pub text: String,
    pub style: LineStyle,
}

/// In-memory [`OutputSink`] for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<CapturedLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line, in write order.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.borrow().clone()
    }

    /// Text written to stdout, one entry per line.
    pub fn stdout(&self) -> Vec<String> {
        self.texts(Stream::Stdout)
    }

    /// Text written to stderr, one entry per line.
    pub fn stderr(&self) -> Vec<String> {
        self.texts(Stream::Stderr)
    }

    /// All stdout text joined with newlines.
    pub fn stdout_text(&self) -> String {
        self.stdout().join("\n")
    }

    fn texts(&self, stream: Stream) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|line| line.stream == stream)
            .map(|line| line.text.clone())
            .collect()
    }

    fn push(&self, stream: Stream, text: &str, style: LineStyle) {
        self.lines.borrow_mut().push(CapturedLine {
            stream,
            text: text.to_string(),
            style,
        });
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, text: &str, style: LineStyle) -> io::Result<()> {
        self.push(Stream::Stdout, text, style);
        Ok(())
    }

    fn error_line(&self, text: &str, style: LineStyle) -> io::Result<()> {
        self.push(Stream::Stderr, text, style);
        Ok(())
    }
}
