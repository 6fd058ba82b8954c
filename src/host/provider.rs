//! Symbol tree providers

use std::fs;

use tracing::debug;

use crate::error::SymbolLoadError;
use crate::symbols::{self, SymbolNode};

use super::DocumentId;

/// Supplies the symbol tree of a document
pub trait SymbolProvider {
    fn symbols(&self, document: &DocumentId) -> Result<Vec<SymbolNode>, SymbolLoadError>;
}

/// Reads `DocumentSymbol[]` JSON, from the document's path or from a
/// buffer captured up front (for stdin)
#[derive(Debug, Clone, Default)]
pub struct JsonSymbolProvider {
    stdin: Option<String>,
}

impl JsonSymbolProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `content` for [`DocumentId::Stdin`]
    pub fn with_stdin(mut self, content: impl Into<String>) -> Self {
        self.stdin = Some(content.into());
        self
    }

    /// Raw JSON for a document
    fn source(&self, document: &DocumentId) -> Result<String, SymbolLoadError> {
        match document {
            DocumentId::Path(path) => Ok(fs::read_to_string(path)?),
            DocumentId::Stdin => self.stdin.clone().ok_or_else(|| {
                SymbolLoadError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no symbol data was read from stdin",
                ))
            }),
        }
    }
}

impl SymbolProvider for JsonSymbolProvider {
    fn symbols(&self, document: &DocumentId) -> Result<Vec<SymbolNode>, SymbolLoadError> {
        let source = self.source(document)?;
        let symbols = match symbols::from_json(&source) {
            Ok(symbols) => symbols,
            Err(error) => return Err(SymbolLoadError::json(error, source)),
        };
        debug!(document = %document, count = symbols.len(), "loaded symbols");
        Ok(symbols)
    }
}

/// Serves a fixed tree for every document
#[derive(Debug, Clone, Default)]
pub struct StaticSymbolProvider {
    pub symbols: Vec<SymbolNode>,
}

impl StaticSymbolProvider {
    pub fn new(symbols: Vec<SymbolNode>) -> Self {
        Self { symbols }
    }
}

impl SymbolProvider for StaticSymbolProvider {
    fn symbols(&self, _document: &DocumentId) -> Result<Vec<SymbolNode>, SymbolLoadError> {
        Ok(self.symbols.clone())
    }
}
