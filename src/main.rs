//! jsonlw CLI.
//!
//! Pretty-prints or validates JSON documents read from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use serde::Deserialize;

use jsonlw::{load_with_limits, DumpOptions, Limits, UnicodeEscapes, Value};

#[derive(Parser)]
#[command(name = "jsonlw")]
#[command(about = "Pretty-print and validate JSON", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print it pretty-printed
    Fmt {
        #[command(flatten)]
        input: InputArgs,

        /// Indent with N spaces per level
        #[arg(long, value_name = "N", conflicts_with = "tabs")]
        indent: Option<usize>,

        /// Indent with tabs
        #[arg(long)]
        tabs: bool,
    },

    /// Parse a document and report whether it is valid
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct InputArgs {
    /// File to read; stdin when omitted
    file: Option<PathBuf>,

    /// Maximum array/object nesting depth
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Keep \u escapes literally and ignore trailing content
    #[arg(long)]
    lenient: bool,

    /// JSON config file with "limits" and "dump" sections
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Settings loadable from `--config`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    limits: Limits,
    dump: DumpOptions,
}

/// Failure categories, mapped to exit codes.
enum Failure {
    Parse(String),
    Io(String),
}

impl Failure {
    fn report(self) -> ExitCode {
        let (code, msg) = match self {
            Failure::Parse(msg) => (1, msg),
            Failure::Io(msg) => (2, msg),
        };
        eprintln!("error: {msg}");
        ExitCode::from(code)
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, Failure> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|e| Failure::Io(format!("cannot read config {}: {e}", path.display())))?;
    let config: Config = serde_json::from_str(&text)
        .map_err(|e| Failure::Io(format!("invalid config {}: {e}", path.display())))?;
    debug!("loaded config from {}: {config:?}", path.display());
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String, Failure> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| Failure::Io(format!("cannot read {}: {e}", path.display()))),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| Failure::Io(format!("cannot read stdin: {e}")))?;
            Ok(text)
        }
    }
}

/// Resolve limits: config file first, then command-line overrides field by field.
fn resolve_limits(input: &InputArgs, config: &Config) -> Limits {
    let mut limits = config.limits;
    if input.lenient {
        limits.unicode_escapes = UnicodeEscapes::Preserve;
        limits.allow_trailing = true;
    }
    if let Some(depth) = input.max_depth {
        limits.max_nesting_depth = depth;
    }
    limits
}

fn parse_input(input: &InputArgs, config: &Config) -> Result<Value, Failure> {
    let text = read_input(input.file.as_deref())?;
    let limits = resolve_limits(input, config);
    info!("parsing {} bytes", text.len());
    load_with_limits(&text, limits).map_err(|e| Failure::Parse(e.to_string()))
}

fn run(command: Commands) -> Result<(), Failure> {
    match command {
        Commands::Fmt {
            input,
            indent,
            tabs,
        } => {
            let config = load_config(input.config.as_deref())?;
            let value = parse_input(&input, &config)?;

            let mut options = config.dump;
            if tabs {
                options.indent = DumpOptions::tabs().indent;
            } else if let Some(width) = indent {
                options.indent = DumpOptions::spaces(width).indent;
            }

            println!("{}", value.dump_options(&options));
            Ok(())
        }
        Commands::Check { input } => {
            let config = load_config(input.config.as_deref())?;
            let value = parse_input(&input, &config)?;
            debug!("document kind: {}", value.kind());
            println!("ok");
            Ok(())
        }
        Commands::Version => {
            println!("jsonlw v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("jsonlw v{}", env!("CARGO_PKG_VERSION"));
        println!("Use --help for usage information");
        return ExitCode::SUCCESS;
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => failure.report(),
    }
}
