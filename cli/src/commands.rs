use std::io::{self, Read};

use anyhow::{Context as AnyhowContext, Result};
use clap::Args;
use tracing::debug;

use scytale::{dispatch, CipherKind, Mode};

#[derive(Args)]
pub struct CipherArgs {
    /// Cipher name (see --list)
    #[arg(long, short, env = "SCYTALE_CIPHER")]
    pub cipher: String,
    /// Key string; ADFGVX takes "polybius,columnar"
    #[arg(long, short, env = "SCYTALE_KEY", default_value = "", hide_env_values = true)]
    pub key: String,
    /// Text to transform; read from stdin when omitted
    pub text: Option<String>,
}

pub fn run(mode: Mode, args: CipherArgs) -> Result<()> {
    let kind: CipherKind = args.cipher.parse()?;
    let text = match args.text {
        Some(text) => text,
        None => read_text(io::stdin().lock()).context("Failed to read text from stdin")?,
    };
    debug!(cipher = %kind, %mode, len = text.len(), "running");

    let output = dispatch(kind, mode, &args.key, &text)?;
    println!("{output}");
    Ok(())
}

/// Read all of `input`, dropping one trailing line break
pub fn read_text(mut input: impl Read) -> io::Result<String> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// One line per cipher: name and expected key
pub fn cipher_list() -> String {
    CipherKind::ALL
        .iter()
        .map(|kind| format!("{:<12}{}\n", kind.name(), kind.key_hint()))
        .collect()
}
