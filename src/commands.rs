//! The three outline commands and the driver that runs them

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::CommandError;
use crate::host::{DocumentId, SymbolProvider, TextDisplay};
use crate::renderer::RenderOptions;
use crate::{render_fenced, RenderConfig};

/// An outline command, as exposed to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Full outline
    ListSymbols,
    /// Outline with function and method bodies collapsed
    ListSymbolsSimple,
    /// Collapsed outline of top-level containers only
    ListSymbolsSimpleClassOnly,
}

impl Command {
    pub const ALL: [Command; 3] = [
        Command::ListSymbols,
        Command::ListSymbolsSimple,
        Command::ListSymbolsSimpleClassOnly,
    ];

    /// Stable command identifier
    pub fn id(self) -> &'static str {
        match self {
            Command::ListSymbols => "listSymbols",
            Command::ListSymbolsSimple => "listSymbolsSimple",
            Command::ListSymbolsSimpleClassOnly => "listSymbolsSimpleClassOnly",
        }
    }

    /// Render options this command runs with
    pub fn options(self) -> RenderOptions {
        match self {
            Command::ListSymbols => RenderOptions::new(),
            Command::ListSymbolsSimple => RenderOptions::new().with_simple(true),
            Command::ListSymbolsSimpleClassOnly => {
                RenderOptions::new().with_simple(true).with_class_only(true)
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.id() == s)
            .ok_or_else(|| format!("unknown command '{}'", s))
    }
}

/// Run a command against the active document
///
/// The command decides the filtering: `config.options` is ignored here and
/// [`Command::options`] is used instead. Only the style table and fence
/// language are taken from `config`.
///
/// With no active document nothing is rendered or displayed. Provider
/// errors are returned as they are.
pub fn run_command(
    command: Command,
    active: Option<&DocumentId>,
    provider: &dyn SymbolProvider,
    display: &mut dyn TextDisplay,
    config: &RenderConfig,
) -> Result<(), CommandError> {
    let Some(document) = active else {
        warn!(command = %command, "no active document");
        return Err(CommandError::NoActiveDocument);
    };

    debug!(command = %command, document = %document, "running outline command");
    let symbols = provider.symbols(document)?;
    let text = render_fenced(
        &symbols,
        command.options(),
        &config.styles,
        &config.fence_language,
    )?;
    display.show_text(&text).map_err(CommandError::Display)
}
