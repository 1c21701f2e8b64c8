//! Binabi library crate
//!
//! This crate provides the core functionality for the `binabi` CLI: take a
//! decimal integer, turn it into its binary digit string (`5` -> `"101"`),
//! ABI-encode that string as a single Solidity `string` parameter and print the
//! encoded bytes as `0x`-prefixed hex. It is organized into small modules:
//! `binary` (decimal parsing and base-2 digits), `abi` (the `string` encoding),
//! `format` (hex/base64 rendering), `clipboard` (cross-platform clipboard
//! helper) and `error`. The binary `src/main.rs` calls `binabi_lib::run()`.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `run_from()` — same pipeline over an explicit argument list, returning the
//!   line that would be printed.
//! - `encode_decimal()` / `decode_payload()` — the conversions without any CLI.

pub mod abi;
pub mod binary;
pub mod clipboard;
pub mod error;
pub mod format;

use std::ffi::OsString;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, warn};

use crate::clipboard::copy_to_clipboard;
pub use crate::error::Error;
use crate::format::OutputFormat;

/// Printed when no decimal number is given. The wording is kept byte-for-byte
/// so scripts that match on it keep working.
pub const USAGE: &str = "Usage: python script.py <arg1>";

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    encode: EncodeArgs,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Non-negative base-10 integer to convert
    #[arg(allow_negative_numbers = true)]
    decimal_number: Option<String>,

    /// Anything after the number is ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Output format for the encoded buffer
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Hex)]
    format: OutputFormat,

    /// Copy the result to the clipboard
    #[arg(long = "clipboard", action = ArgAction::SetTrue)]
    clipboard: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode an ABI payload back into its binary digit string
    Decode {
        /// Hex payload, with or without 0x prefix
        payload: String,

        /// Print the decimal value instead of the binary digits
        #[arg(long = "decimal", action = ArgAction::SetTrue)]
        decimal: bool,
    },
}

/// Convert `decimal_number` to binary digits and ABI-encode them as a
/// `string`.
///
/// Returns the raw encoded buffer; see [`format::render`] for display.
pub fn encode_decimal(decimal_number: &str) -> Result<Vec<u8>, Error> {
    let n = binary::parse_decimal(decimal_number)?;
    let digits = binary::to_binary_digits(&n);
    debug!("{} -> {:?} ({} digits)", decimal_number.trim(), digits, digits.len());
    let encoded = abi::encode_string(&digits);
    debug!("encoded {} bytes", encoded.len());
    Ok(encoded)
}

/// Decode a hex ABI payload produced by [`encode_decimal`].
///
/// Returns the binary digit string, or its base-10 value when `decimal` is
/// set.
pub fn decode_payload(payload: &str, decimal: bool) -> Result<String, Error> {
    let bytes = format::from_hex(payload)?;
    debug!("decoding {} bytes", bytes.len());
    let digits = abi::decode_string(&bytes)?;
    let n = binary::from_binary_digits(&digits)?;
    if decimal {
        Ok(n.to_string())
    } else {
        Ok(digits)
    }
}

fn execute(cli: &Cli) -> Result<String, Error> {
    match &cli.command {
        Some(Commands::Decode { payload, decimal }) => decode_payload(payload, *decimal),
        None => match cli.encode.decimal_number.as_deref() {
            Some(decimal_number) => {
                if !cli.encode.extra.is_empty() {
                    warn!("ignoring {} extra argument(s)", cli.encode.extra.len());
                }
                let encoded = encode_decimal(decimal_number)?;
                Ok(format::render(&encoded, cli.encode.format))
            }
            None => Ok(USAGE.to_string()),
        },
    }
}

/// Run the CLI pipeline over `args` (program name first, like
/// `std::env::args_os()`) and return the line `run()` would print.
///
/// Help and version requests surface as [`Error::Cli`]. The clipboard flag is
/// ignored here.
pub fn run_from<I, T>(args: I) -> Result<String, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    execute(&cli)
}

/// Run the Binabi CLI.
///
/// This function is the high-level entrypoint used by the `binabi` binary. It
/// parses CLI arguments and prints exactly one line to stdout: the encoded
/// payload, the decoded value, or the usage line when no number was given.
/// Errors are printed to stderr as `error: ...` and exit the process with
/// status 1; nothing is written to stdout in that case.
///
/// Diagnostics go through `log` to stderr; set `RUST_LOG=debug` to trace each
/// step.
///
/// Example:
///
/// ```no_run
/// binabi_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let cli = Cli::parse();
    let line = execute(&cli).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    println!("{}", line);

    if cli.encode.clipboard && let Err(e) = copy_to_clipboard(&line) {
        warn!("failed to copy to clipboard: {}", e);
    }
}
