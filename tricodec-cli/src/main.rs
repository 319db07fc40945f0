//! tricodec CLI - compare Huffman, arithmetic and LZW compression
//!
//! Compresses one input file with each scheme, writes the packed stream and
//! a human-readable info file per scheme, and prints a size/ratio/time report.

mod commands;
mod logging;
mod runner;
mod utils;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{CompressOptions, cmd_compress, cmd_decompress, cmd_inspect};
use runner::CodecKind;
use std::path::PathBuf;
use tricodec_lzw::{CodeWidth, LzwConfig};

#[derive(Parser)]
#[command(name = "tricodec")]
#[command(
    author,
    version,
    about = "Compare Huffman, arithmetic and LZW compression on one input"
)]
#[command(long_about = "
tricodec compresses a file with Huffman coding, arithmetic coding and LZW
and reports original size, compressed size, ratio and time for each.

Examples:
  tricodec compress input.txt
  tricodec compress input.txt -o out --codec huffman --codec lzw
  tricodec compress input.txt --lzw-width variable --lzw-max-bits 16
  tricodec compress input.txt --parallel --verify --json
  tricodec decompress out --codec arithmetic -o restored.txt
  tricodec inspect input.txt
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file with each selected codec
    #[command(alias = "c")]
    Compress {
        /// Input file
        input: PathBuf,

        /// Directory for the packed, info and model artifacts
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Codecs to run (all if omitted)
        #[arg(long = "codec", value_enum)]
        codecs: Vec<CodecKind>,

        /// LZW code width
        #[arg(long, value_enum, default_value = "fixed")]
        lzw_width: WidthArg,

        /// LZW maximum code width in bits (9-16)
        #[arg(long, default_value_t = 12)]
        lzw_max_bits: u8,

        /// Run the codecs in parallel
        #[arg(long)]
        parallel: bool,

        /// Decode each result and compare with the input
        #[arg(long)]
        verify: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Do not write artifact files
        #[arg(long)]
        no_artifacts: bool,
    },

    /// Restore the original bytes from compress artifacts
    #[command(alias = "d")]
    Decompress {
        /// Directory holding the artifacts
        dir: PathBuf,

        /// Codec whose artifacts to decode
        #[arg(long, value_enum)]
        codec: CodecKind,

        /// Output file (default: <codec>_decompressed.bin in DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the byte frequency table of a file
    #[command(alias = "i")]
    Inspect {
        /// Input file
        input: PathBuf,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

/// LZW code width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WidthArg {
    /// Every code uses the maximum width
    Fixed,
    /// Codes grow from 9 bits with the dictionary
    Variable,
}

impl From<WidthArg> for CodeWidth {
    fn from(arg: WidthArg) -> Self {
        match arg {
            WidthArg::Fixed => CodeWidth::Fixed,
            WidthArg::Variable => CodeWidth::Variable,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.log_json);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            codecs,
            lzw_width,
            lzw_max_bits,
            parallel,
            verify,
            json,
            no_artifacts,
        } => LzwConfig::new(lzw_max_bits, lzw_width.into())
            .map_err(Into::into)
            .and_then(|lzw| {
                let options = CompressOptions {
                    output,
                    codecs,
                    lzw,
                    parallel,
                    verify,
                    json,
                    artifacts: !no_artifacts,
                };
                cmd_compress(&input, &options)
            }),
        Commands::Decompress { dir, codec, output } => {
            cmd_decompress(&dir, codec, output.as_deref())
        }
        Commands::Inspect { input, json } => cmd_inspect(&input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compress() {
        let cli = Cli::try_parse_from([
            "tricodec",
            "-vv",
            "compress",
            "in.txt",
            "--codec",
            "lzw",
            "--lzw-width",
            "variable",
            "--lzw-max-bits",
            "14",
            "--parallel",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Compress {
                codecs,
                lzw_width,
                lzw_max_bits,
                parallel,
                no_artifacts,
                ..
            } => {
                assert_eq!(codecs, vec![CodecKind::Lzw]);
                assert_eq!(lzw_width, WidthArg::Variable);
                assert_eq!(lzw_max_bits, 14);
                assert!(parallel);
                assert!(!no_artifacts);
            }
            _ => panic!("expected compress"),
        }
    }

    #[test]
    fn test_parse_decompress_requires_codec() {
        assert!(Cli::try_parse_from(["tricodec", "decompress", "out"]).is_err());
    }
}
