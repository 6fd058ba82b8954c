//! Symbol Outline CLI
//!
//! Usage:
//!   symbol-outline [OPTIONS] <COMMAND> [FILE]
//!
//! FILE holds the `textDocument/documentSymbol` JSON of the document to
//! outline. Without FILE, piped stdin is used.
//!
//! Options:
//!   -s, --styles <FILE>     Kind style overrides (TOML format)
//!   -o, --output <FILE>     Write the outline to a file instead of stdout
//!   -l, --language <TAG>    Language tag on the opening fence
//!   -v, --verbose           Debug logging on stderr
//!   -h, --help              Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use symbol_outline::host::{FileDisplay, JsonSymbolProvider, StdoutDisplay};
use symbol_outline::{
    run_command, Command, CommandError, DocumentId, RenderConfig, StyleTable, TextDisplay,
    DEFAULT_FENCE_LANGUAGE,
};

#[derive(Parser)]
#[command(name = "symbol-outline")]
#[command(about = "Render a document's symbol tree as an indented pseudo-code outline")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,

    /// Kind style overrides (TOML format)
    #[arg(short, long, global = true)]
    styles: Option<PathBuf>,

    /// Write the outline to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Language tag on the opening fence
    #[arg(short, long, global = true, default_value = DEFAULT_FENCE_LANGUAGE)]
    language: String,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Outline every symbol
    ListSymbols {
        /// Symbol JSON (reads from stdin if not provided)
        input: Option<PathBuf>,
    },
    /// Outline with function and method bodies collapsed
    ListSymbolsSimple {
        /// Symbol JSON (reads from stdin if not provided)
        input: Option<PathBuf>,
    },
    /// Collapsed outline of top-level classes and other containers only
    ListSymbolsSimpleClassOnly {
        /// Symbol JSON (reads from stdin if not provided)
        input: Option<PathBuf>,
    },
}

impl CliCommand {
    fn split(self) -> (Command, Option<PathBuf>) {
        match self {
            CliCommand::ListSymbols { input } => (Command::ListSymbols, input),
            CliCommand::ListSymbolsSimple { input } => (Command::ListSymbolsSimple, input),
            CliCommand::ListSymbolsSimpleClassOnly { input } => {
                (Command::ListSymbolsSimpleClassOnly, input)
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load style overrides
    let styles = match &cli.styles {
        Some(path) => match StyleTable::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading styles '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => StyleTable::default(),
    };

    let (command, input) = cli.command.split();

    // Resolve the active document: an explicit file, else piped stdin
    let mut provider = JsonSymbolProvider::new();
    let active = match input {
        Some(path) => Some(DocumentId::Path(path)),
        None if io::stdin().is_terminal() => None,
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            provider = provider.with_stdin(buffer);
            Some(DocumentId::Stdin)
        }
    };

    let mut display: Box<dyn TextDisplay> = match &cli.output {
        Some(path) => Box::new(FileDisplay::new(path)),
        None => Box::new(StdoutDisplay),
    };

    let config = RenderConfig::new()
        .with_styles(styles)
        .with_fence_language(cli.language);

    match run_command(command, active.as_ref(), &provider, display.as_mut(), &config) {
        Ok(()) => {}
        Err(CommandError::NoActiveDocument) => {
            eprintln!("Warning: there must be an active document (pass FILE or pipe symbol JSON)");
            std::process::exit(1);
        }
        Err(CommandError::Symbols(e)) => {
            let name = active
                .as_ref()
                .map(DocumentId::display_name)
                .unwrap_or_default();
            eprintln!("{}", e.format(&name));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
