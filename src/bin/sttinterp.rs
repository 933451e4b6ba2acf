//! STT Interpreter Command Line Interface
//!
//! Decodes a status table given as byte words, prints every service, and
//! encodes the services back to show the round trip.
//!
//! Usage:
//!   sttinterp                                  # decode the built-in sample table
//!   sttinterp 11001001 11000000 01111111       # decode binary words
//!   sttinterp --hex c9 c0 7f                   # decode hex words
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use clap::Parser;
use stt_interpreter::{Interpreter, SttInterpreter};

/// Table decoded when no bytes are given.
const SAMPLE_TABLE: &str =
    "11001001 11000000 01111111 01100001 00111010 00110000 11011111 11101011 01100000 00010111";

#[derive(Parser)]
#[command(name = "sttinterp")]
#[command(version, about = "Decode and re-encode a Service/Status Table")]
struct Args {
    /// Table bytes, one word per byte (binary unless --hex)
    #[arg(value_name = "BYTES")]
    words: Vec<String>,

    /// Read the words as hexadecimal
    #[arg(long)]
    hex: bool,

    /// Skip re-encoding the decoded services
    #[arg(long)]
    no_roundtrip: bool,
}

/// Parse whitespace-separated words into bytes using `radix`.
fn parse_words<'a, I>(words: I, radix: u32) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(|word| {
            u8::from_str_radix(word, radix)
                .with_context(|| format!("invalid byte {word:?} (radix {radix})"))
        })
        .collect()
}

/// Render a byte as 8 binary digits.
fn format_byte(byte: u8) -> String {
    format!("{byte:08b}")
}

fn run(args: &Args) -> Result<()> {
    let radix = if args.hex { 16 } else { 2 };
    let bytes = if args.words.is_empty() {
        tracing::info!("no bytes given, using the sample table");
        parse_words([SAMPLE_TABLE], 2)?
    } else {
        parse_words(args.words.iter().map(String::as_str), radix)?
    };

    println!("Input ({} bytes):", bytes.len());
    for byte in &bytes {
        println!("  {}", format_byte(*byte));
    }

    let stt = SttInterpreter::new();
    let services = stt.parse(&bytes).context("cannot decode table")?;

    println!("Services ({}):", services.len());
    for service in &services {
        println!("  {service}");
    }

    if args.no_roundtrip {
        return Ok(());
    }

    let encoded = stt.to_bytes(&services).context("cannot encode services")?;
    println!("Re-encoded ({} bytes):", encoded.len());
    for byte in &encoded {
        println!("  {}", format_byte(*byte));
    }

    if encoded != bytes {
        tracing::warn!("re-encoded table differs from input");
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    run(&args)
}
