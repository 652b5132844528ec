use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use gitty_parser::{AppResult, Captured, Config, ParserKind, ParserRegistry};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Turn captured git output into JSON records
#[derive(Debug, Parser)]
#[command(name = "gitty-parse", version)]
struct Cli {
    /// Output kind: log, upstream, status, commit, checkout, branch, remotes, syncErr, syncSuccess
    kind: ParserKind,

    /// File holding the captured text, `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Second captured text: untracked listing for `status`, stdout for `checkout`
    #[arg(long)]
    aux: Option<PathBuf>,

    /// Config file to use instead of ~/.config/gitty-parser/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_default()?,
    };

    init_tracing(cli.verbose, &config.logging.level);

    let primary = read_input(&cli.input)?;
    let auxiliary = cli.aux.as_deref().map(read_input).transpose()?;

    let pretty = cli.pretty || config.output.pretty;
    let registry = ParserRegistry::new(config)?;

    let input = Captured {
        primary: &primary,
        auxiliary: auxiliary.as_deref(),
    };
    let output = registry.parse(cli.kind, input)?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}

fn init_tracing(verbose: u8, configured: &str) {
    let level = match verbose {
        0 => configured.parse().unwrap_or(tracing::Level::WARN),
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}
