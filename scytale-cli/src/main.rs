//! Scytale CLI - Classical cipher command-line tool.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use rand::rngs::StdRng;
use rand::{rng, SeedableRng};
use scytale::hill::{self, Hill, HillKey};
use scytale::rail_fence::{RailCount, RailFence, RailFenceKey};
use scytale::Cipher;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Classical cipher CLI tool
#[derive(Parser)]
#[command(name = "scytale")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v for key material, -vv for every block)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message
    Encrypt(CipherArgs),

    /// Decrypt a message
    Decrypt(CipherArgs),

    /// Generate a random invertible Hill cipher key
    Keygen {
        /// Seed for a reproducible key
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Display information about supported ciphers
    Info,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct CipherArgs {
    /// Cipher to use
    #[arg(short, long, value_enum, default_value = "hill")]
    cipher: Algorithm,

    /// Cipher key: up to nine letters for Hill, a rail count for Rail Fence
    #[arg(short, long)]
    key: String,

    /// Rail Fence only: do not pad the message to close the zig-zag
    #[arg(long)]
    no_pad: bool,

    /// Input file (reads stdin if neither this nor MESSAGE is given)
    #[arg(short, long, conflicts_with = "message")]
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Message text
    message: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Hill cipher, 3x3 key matrix over lowercase letters
    Hill,
    /// Rail Fence zig-zag transposition
    #[value(name = "rail-fence")]
    RailFence,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Hill => write!(f, "{}", Hill::NAME),
            Algorithm::RailFence => write!(f, "{}", RailFence::NAME),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encryption"),
            Direction::Decrypt => f.write_str("decryption"),
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Read the message from the argument, the input file, or stdin.
/// A trailing line break is dropped.
fn read_message(args: &CipherArgs) -> Result<String> {
    let mut message = if let Some(message) = &args.message {
        message.clone()
    } else if let Some(path) = &args.input {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read message from stdin")?;
        buf
    };

    let trimmed = message.trim_end_matches(['\n', '\r']).len();
    message.truncate(trimmed);
    Ok(message)
}

fn apply<C: Cipher>(key: &C::Key, direction: Direction, message: &str) -> scytale::Result<String> {
    match direction {
        Direction::Encrypt => C::encrypt(key, message),
        Direction::Decrypt => C::decrypt(key, message),
    }
}

/// Encrypt or decrypt with the selected cipher
fn cmd_cipher(args: &CipherArgs, direction: Direction) -> Result<()> {
    let message = read_message(args)?;

    tracing::info!(cipher = %args.cipher, length = message.len(), "processing message");

    let outcome = match args.cipher {
        Algorithm::Hill => {
            if args.no_pad {
                tracing::warn!("--no-pad only applies to rail-fence; ignoring");
            }
            let key = HillKey::new(&args.key)
                .with_context(|| format!("Invalid Hill key `{}`", args.key))?;
            apply::<Hill>(&key, direction, &message)
        }
        Algorithm::RailFence => {
            let rails: RailCount = args.key.parse().with_context(|| {
                format!(
                    "Invalid key `{}`: Rail Fence needs a positive rail count",
                    args.key
                )
            })?;
            let key = if args.no_pad {
                RailFenceKey::unpadded(rails)
            } else {
                RailFenceKey::new(rails)
            };
            apply::<RailFence>(&key, direction, &message)
        }
    };

    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            let mapping = err.is_mapping();
            let err = anyhow::Error::new(err)
                .context(format!("{} {} failed", args.cipher, direction));
            if mapping {
                return Err(err.context("Messages may only contain the lowercase letters a-z"));
            }
            return Err(err);
        }
    };

    if let Some(out_path) = &args.output {
        fs::write(out_path, &result)
            .with_context(|| format!("Failed to write output file: {}", out_path.display()))?;
        tracing::info!(path = %out_path.display(), "result written");
    } else {
        println!("{}", result);
    }

    Ok(())
}

/// Generate a random Hill key
fn cmd_keygen(seed: Option<u64>) {
    let key = match seed {
        Some(seed) => HillKey::generate(&mut StdRng::seed_from_u64(seed)),
        None => HillKey::generate(&mut rng()),
    };

    tracing::debug!(matrix = %key.matrix(), "generated key matrix");
    println!("{}", key.to_key_string());
}

/// Display information about supported ciphers
fn cmd_info() {
    println!("Scytale - Classical Cipher Library");
    println!();
    println!("Supported ciphers:");
    println!();
    println!("  {} - Polygraphic substitution over Z/26", Hill::NAME);
    println!(
        "    hill         Key: up to {} letters a-z, completed with a, b, c, ...",
        hill::params::KEY_LENGTH
    );
    println!(
        "                 Blocks of {} letters, padded with `{}`",
        hill::params::MATRIX_SIZE,
        hill::params::PAD
    );
    println!("                 Decryption needs a determinant coprime to 26");
    println!();
    println!("  {} - Zig-zag transposition", RailFence::NAME);
    println!("    rail-fence   Key: positive rail count");
    println!(
        "                 Padded with `{}` to close the zig-zag (disable with --no-pad)",
        scytale::rail_fence::PAD
    );
}

/// Generate shell completions
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "scytale", &mut io::stdout());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encrypt(args) => cmd_cipher(&args, Direction::Encrypt),

        Commands::Decrypt(args) => cmd_cipher(&args, Direction::Decrypt),

        Commands::Keygen { seed } => {
            cmd_keygen(seed);
            Ok(())
        }

        Commands::Info => {
            cmd_info();
            Ok(())
        }

        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rail_fence_args() {
        let cli = Cli::try_parse_from([
            "scytale",
            "-vv",
            "encrypt",
            "--cipher",
            "rail-fence",
            "--key",
            "3",
            "--no-pad",
            "hello",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Encrypt(args) => {
                assert!(args.cipher == Algorithm::RailFence);
                assert_eq!(args.key, "3");
                assert!(args.no_pad);
                assert_eq!(args.message.as_deref(), Some("hello"));
            }
            _ => panic!("expected encrypt"),
        }
    }

    #[test]
    fn test_message_and_input_conflict() {
        let result = Cli::try_parse_from([
            "scytale", "decrypt", "--key", "gyb", "--input", "in.txt", "poz",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_message_trims_line_break() {
        let args = CipherArgs {
            cipher: Algorithm::Hill,
            key: "gyb".to_string(),
            no_pad: false,
            input: None,
            output: None,
            message: Some("act\r\n".to_string()),
        };
        assert_eq!(read_message(&args).unwrap(), "act");
    }

    #[test]
    fn test_apply_dispatches_direction() {
        let key = HillKey::new("gyb").unwrap();
        assert_eq!(apply::<Hill>(&key, Direction::Encrypt, "act").unwrap(), "poz");
        assert_eq!(apply::<Hill>(&key, Direction::Decrypt, "poz").unwrap(), "act");
    }
}
