//! Command-line interface for traindown
//! This binary parses a traindown file and prints the resulting session (or its tokens).
//!
//! Usage:
//!   traindown `<path>` [--format json|yaml] [--config `<file>`] [--tokens]
//!   traindown -                                   - Read the log from stdin

use clap::{Arg, ArgAction, Command};
use std::io::Read;
use std::process::ExitCode;
use traindown::traindown::config::{Loader, OutputConfig, OutputFormat};
use traindown::traindown::parsing::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("traindown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse traindown training logs")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the traindown file, or '-' for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["json", "yaml"]),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the scanned tokens instead of the session")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");

    match run(
        path,
        matches.get_one::<String>("config").map(String::as_str),
        matches.get_one::<String>("format").map(String::as_str),
        matches.get_flag("tokens"),
    ) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(
    path: &str,
    config_path: Option<&str>,
    format: Option<&str>,
    tokens_only: bool,
) -> Result<String, String> {
    let mut loader = Loader::new();
    if let Some(config_path) = config_path {
        loader = loader.with_file(config_path);
    }
    if let Some(format) = format {
        loader = loader
            .set_override("output.format", format)
            .map_err(|e| e.to_string())?;
    }
    let config = loader.build().map_err(|e| format!("invalid configuration: {}", e))?;

    let source = read_source(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    let parser = Parser::from_config(&config).map_err(|e| e.to_string())?;

    if tokens_only {
        return token_listing(&parser, &source);
    }

    let session = parser.parse_bytes(&source).map_err(|e| e.to_string())?;
    if session.has_errors() {
        for diagnostic in &session.errors {
            tracing::warn!("{}", diagnostic);
        }
    }
    render(&session, &config.output)
}

/// One `line<TAB>KIND<TAB>value` row per token
fn token_listing(parser: &Parser, source: &[u8]) -> Result<String, String> {
    let text = std::str::from_utf8(source).map_err(|e| e.to_string())?;
    let tokens = parser.tokens(text).map_err(|e| e.to_string())?;
    Ok(tokens
        .iter()
        .map(|token| format!("{}\t{}\t{}", token.line(), token.kind(), token.value()))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn read_source(path: &str) -> std::io::Result<Vec<u8>> {
    if path == "-" {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read(path)
    }
}

fn render<T: serde::Serialize>(value: &T, output: &OutputConfig) -> Result<String, String> {
    let rendered = match (output.format, output.pretty) {
        (OutputFormat::Json, true) => {
            serde_json::to_string_pretty(value).map_err(|e| e.to_string())?
        }
        (OutputFormat::Json, false) => serde_json::to_string(value).map_err(|e| e.to_string())?,
        (OutputFormat::Yaml, _) => serde_yaml::to_string(value).map_err(|e| e.to_string())?,
    };
    Ok(rendered.trim_end().to_string())
}
