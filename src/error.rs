//! Error types for loading, rendering and running outline commands

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::symbols::SymbolKind;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while rendering an outline
#[derive(Error, Debug)]
pub enum RenderError {
    /// The style table has no entry for a kind present in the tree.
    /// This is a configuration bug, never a per-symbol condition.
    #[error("no style configured for symbol kind {kind}")]
    UnresolvableKindStyle { kind: SymbolKind },
}

/// Errors raised while acquiring a symbol tree
#[derive(Error, Debug)]
pub enum SymbolLoadError {
    #[error("Failed to read symbols: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON, kept with the text it was decoded from
    #[error("Invalid symbol JSON: {error}")]
    Json {
        #[source]
        error: serde_json::Error,
        input: String,
    },
}

impl SymbolLoadError {
    /// Create a decoding error for `input`
    pub fn json(error: serde_json::Error, input: impl Into<String>) -> Self {
        Self::Json {
            error,
            input: input.into(),
        }
    }

    /// The text that failed to decode
    pub fn input(&self) -> Option<&str> {
        match self {
            SymbolLoadError::Json { input, .. } => Some(input),
            SymbolLoadError::Io(_) => None,
        }
    }

    /// Byte span of the offending input, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            SymbolLoadError::Json { error, input } if error.line() > 0 => {
                let offset = line_col_to_offset(input, error.line(), error.column());
                Some(offset..(offset + 1).min(input.len()).max(offset))
            }
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, filename: &str) -> String {
        let (Some(span), Some(source)) = (self.span(), self.input()) else {
            return format!("{}: {}", filename, self);
        };
        // ariadne labels count chars, not bytes
        let span = char_index(source, span.start)..char_index(source, span.end);

        let message = self.to_string();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, message),
        }
    }
}

/// Number of chars that start before byte `offset`
fn char_index(source: &str, offset: usize) -> usize {
    source
        .char_indices()
        .take_while(|(idx, _)| *idx < offset)
        .count()
}

/// Convert a 1-based line and column into a byte offset, clamped to the source
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Errors raised by an outline command
#[derive(Error, Debug)]
pub enum CommandError {
    /// A command was invoked with no document to outline
    #[error("There must be an active document")]
    NoActiveDocument,

    /// The symbol provider failed; passed through unchanged
    #[error(transparent)]
    Symbols(#[from] SymbolLoadError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The display collaborator could not show the result
    #[error("failed to display outline: {0}")]
    Display(#[source] std::io::Error),
}
