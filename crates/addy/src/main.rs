//! `addy` — print the address of a base64 Ed25519 private key read from stdin.
//!
//! ```sh
//! echo "base64-Ed25519-priv-key" | addy
//! ```

use std::io::{self, IsTerminal, Read};

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let input = read_stdin()?;
    let address = addy::address_from_base64(&input).context("Could not derive address")?;
    print!("{}", address);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("Usage: echo \"base64-Ed25519-priv-key\" | addy");
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("Error reading from stdin")?;
    Ok(buf)
}
