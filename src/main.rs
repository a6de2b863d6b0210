//! CLI tool to scan a script and print token diagnostics.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use scriptlex::{LexError, ListingStyle, SAMPLE};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "scriptlex",
    version,
    about = "Scan a script and print token diagnostics"
)]
struct Cli {
    /// Script to scan, or `-` for stdin. Defaults to the built-in sample.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Scan the built-in sample program.
    #[arg(long, conflicts_with = "file")]
    demo: bool,

    /// Which rendering of the scan to print.
    #[arg(long, value_enum, default_value_t = View::Annotate)]
    view: View,

    /// Print every token in full in the token listing.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Tokens grouped by line.
    Tokens,
    /// Source lines with caret markers under each token.
    Annotate,
    /// Tokens as a JSON array.
    Json,
    /// Listing followed by the annotated view.
    All,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Lex(err)) => {
            eprint!("{}", err.render());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

/// Log to stderr when `SCRIPTLEX_LOG` or `RUST_LOG` is set.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SCRIPTLEX_LOG")
        .or_else(|_| EnvFilter::try_from_default_env());

    if let Ok(filter) = filter {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(filter)
            .init();
    }
}

fn load_source(cli: &Cli) -> Result<(String, String), CliError> {
    let path = match &cli.file {
        Some(path) if !cli.demo => path,
        _ => return Ok(("<sample>".to_string(), SAMPLE.to_string())),
    };

    let label = path.display().to_string();
    let read = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };

    match read {
        Ok(source) => Ok((label, source)),
        Err(source) => Err(CliError::Read {
            path: label,
            source,
        }),
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let (label, source) = load_source(cli)?;
    tracing::info!(input = %label, bytes = source.len(), "scanning");

    let tokens = scriptlex::scan(&source)?;
    let style = if cli.verbose {
        ListingStyle::Verbose
    } else {
        ListingStyle::Compact
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.view {
        View::Tokens => scriptlex::write_tokens(&mut out, &tokens, style)?,
        View::Annotate => scriptlex::write_annotated(&mut out, &tokens, &source)?,
        View::Json => writeln!(out, "{}", scriptlex::to_json(&tokens)?)?,
        View::All => {
            scriptlex::write_tokens(&mut out, &tokens, style)?;
            writeln!(out)?;
            scriptlex::write_annotated(&mut out, &tokens, &source)?;
        }
    }
    out.flush()?;
    Ok(())
}
