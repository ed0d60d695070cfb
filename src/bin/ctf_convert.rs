// src/bin/ctf_convert.rs
//! ctf-convert — convert byte values between decimal, text, hex and binary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ctf_converter::config::{self, Config};
use ctf_converter::convert::{self, prepare_input};
use ctf_converter::{load_data, read_input, Repr, ValueMode};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctf-convert", version)]
#[command(about = "Convert byte values between decimal, text, hex and binary")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a value from one representation to another
    Convert {
        /// Representation of the input
        #[arg(short, long, value_enum)]
        from: Repr,

        /// Representation to produce
        #[arg(short, long, value_enum)]
        to: Repr,

        /// Read decimal/hex as one number instead of a byte sequence
        #[arg(short, long)]
        single_value: bool,

        #[command(flatten)]
        source: Source,
    },
    /// XOR two values written in the same representation
    Xor {
        /// Representation of both inputs and the output
        #[arg(short, long, value_enum, default_value = "text")]
        repr: Repr,

        /// Treat A and B as paths to files holding the values
        #[arg(long)]
        files: bool,

        a: String,
        b: String,
    },
}

#[derive(Args)]
struct Source {
    /// Value to convert (stdin when neither this nor --file is given)
    #[arg(conflicts_with = "file")]
    input: Option<String>,

    /// Read the value from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load();
    debug!(?config, "configuration loaded");

    let output = match cli.command {
        Command::Convert {
            from,
            to,
            single_value,
            source,
        } => {
            let raw = read_source(source)?;
            let mode = if single_value {
                ValueMode::SingleValue
            } else {
                ValueMode::PerByte
            };
            convert::convert(
                prepare_input(&raw, from, &config.input),
                from,
                to,
                mode,
                &config.format,
            )
            .with_context(|| format!("could not convert {from} to {to}"))?
        }
        Command::Xor { repr, files, a, b } => run_xor(config, repr, files, &a, &b)?,
    };

    println!("{output}");
    Ok(())
}

fn run_xor(config: &Config, repr: Repr, files: bool, a: &str, b: &str) -> Result<String> {
    let (a, b) = if files {
        info!(a, b, "reading xor operands from files");
        let a = load_data(a).context("could not load first operand")?;
        let b = load_data(b).context("could not load second operand")?;
        (a, b)
    } else {
        (a.to_owned(), b.to_owned())
    };

    let a = prepare_input(&a, repr, &config.input);
    let b = prepare_input(&b, repr, &config.input);
    convert::xor(a, b, repr, &config.format)
        .with_context(|| format!("could not xor {repr} values"))
}

fn read_source(source: Source) -> Result<String> {
    read_input(source.input, source.file.as_deref(), std::io::stdin())
        .context("could not read input")
}
