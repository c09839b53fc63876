use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use scytale::Mode;

mod commands;

#[derive(Parser)]
#[command(name = "scytale")]
#[command(about = "Classical cipher toolkit")]
#[command(version)]
struct Cli {
    /// List the supported ciphers and their keys, then exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "SCYTALE_DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text
    Encrypt(commands::CipherArgs),
    /// Decrypt text
    Decrypt(commands::CipherArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scytale=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scytale=warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.list {
        print!("{}", commands::cipher_list());
        return Ok(());
    }

    match cli.command {
        Some(Commands::Encrypt(args)) => commands::run(Mode::Encrypt, args),
        Some(Commands::Decrypt(args)) => commands::run(Mode::Decrypt, args),
        None => anyhow::bail!("no command given; try `scytale --help` or `scytale --list`"),
    }
}
