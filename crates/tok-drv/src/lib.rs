//! tok-drv - Tokenizer Driver
//!
//! Thin command-line wrapper around tok-scan: read a file, tokenize it, and
//! print one `KIND{text}` line per token.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tok_scan::Scanner;

/// Configuration for the driver.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input_file: Option<PathBuf>,
    pub verbose: bool,
    pub help: bool,
    pub version: bool,
}

/// Parse command line arguments.
pub fn parse_args() -> Result<Config, String> {
    parse_args_from(env::args().skip(1))
}

fn parse_args_from(args: impl Iterator<Item = String>) -> Result<Config, String> {
    let mut config = Config::default();

    for arg in args {
        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg.starts_with('-') {
            return Err(format!("Unknown option: {}", arg));
        } else if config.input_file.is_some() {
            return Err(format!("Unexpected extra argument: {}", arg));
        } else {
            config.input_file = Some(PathBuf::from(arg));
        }
    }

    Ok(config)
}

/// Print help message.
pub fn print_help() {
    println!("Tok Tokenizer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tok [OPTIONS] <input file>");
    println!();
    println!("Options:");
    println!("  -h, --help           Print this help message");
    println!("  -V, --version        Print version information");
    println!("  -v, --verbose        Enable verbose output");
    println!();
    println!("Examples:");
    println!("  tok input.txt        Tokenize input.txt and print the tokens");
    println!("  tok -v input.txt     Tokenize with verbose output");
}

/// Print version.
pub fn print_version() {
    println!("tok {}", env!("CARGO_PKG_VERSION"));
}

/// Runs the driver: parse arguments, read the input file, tokenize, print.
pub fn run() -> Result<()> {
    let config = parse_args().map_err(|e| anyhow!(e))?;

    if config.help {
        print_help();
        return Ok(());
    }

    if config.version {
        print_version();
        return Ok(());
    }

    let path = config
        .input_file
        .ok_or_else(|| anyhow!("no input file provided"))?;

    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if config.verbose {
        eprintln!("[verbose] Scanning: {}", path.display());
    }

    let mut scanner = Scanner::new(&source);
    let tokens = scanner.tokenize()?;

    if config.verbose {
        eprintln!("[verbose] {} tokens", tokens.len());
    }

    for token in &tokens {
        println!("{}", token);
    }

    Ok(())
}
