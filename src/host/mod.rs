//! Collaborators around the renderer: where symbols come from and where the
//! rendered outline goes

pub mod display;
pub mod provider;

use std::fmt;
use std::path::{Path, PathBuf};

pub use display::{BufferDisplay, FileDisplay, StdoutDisplay, TextDisplay};
pub use provider::{JsonSymbolProvider, StaticSymbolProvider, SymbolProvider};

/// The document an outline is requested for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentId {
    /// Symbol JSON stored in a file
    Path(PathBuf),
    /// Symbol JSON piped on standard input
    Stdin,
}

impl DocumentId {
    /// Name used in logs and error reports
    pub fn display_name(&self) -> String {
        match self {
            DocumentId::Path(path) => path.display().to_string(),
            DocumentId::Stdin => "<stdin>".to_string(),
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl From<PathBuf> for DocumentId {
    fn from(path: PathBuf) -> Self {
        DocumentId::Path(path)
    }
}

impl From<&Path> for DocumentId {
    fn from(path: &Path) -> Self {
        DocumentId::Path(path.to_path_buf())
    }
}

impl From<&str> for DocumentId {
    fn from(path: &str) -> Self {
        DocumentId::Path(PathBuf::from(path))
    }
}
