//! Destinations for rendered outlines

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Shows a rendered outline to the user
pub trait TextDisplay {
    fn show_text(&mut self, content: &str) -> io::Result<()>;
}

/// Prints to stdout
#[derive(Debug, Default)]
pub struct StdoutDisplay;

impl TextDisplay for StdoutDisplay {
    fn show_text(&mut self, content: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", content)?;
        stdout.flush()
    }
}

/// Writes each outline to a file, replacing earlier content
#[derive(Debug, Clone)]
pub struct FileDisplay {
    pub path: PathBuf,
}

impl FileDisplay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextDisplay for FileDisplay {
    fn show_text(&mut self, content: &str) -> io::Result<()> {
        fs::write(&self.path, content)
    }
}

/// Keeps every outline it is shown
#[derive(Debug, Clone, Default)]
pub struct BufferDisplay {
    pub shown: Vec<String>,
}

impl BufferDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent outline, if any
    pub fn last(&self) -> Option<&str> {
        self.shown.last().map(String::as_str)
    }
}

impl TextDisplay for BufferDisplay {
    fn show_text(&mut self, content: &str) -> io::Result<()> {
        self.shown.push(content.to_string());
        Ok(())
    }
}
