//! `ted` CLI — read or set values in a TOML document by dotted path.
//!
//! ## Usage
//!
//! ```sh
//! # Print the value at a path (stdin → stdout, nothing rewritten)
//! ted -p server.port < config.toml
//!
//! # Set a typed value, creating missing tables, and write the file back
//! ted -f config.toml -p server.tls.enabled -v yes -t bool
//!
//! # Several typed assignments in one pass
//! ted --set-int server.port=8080 --set-string server.host=example.org < in.toml > out.toml
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ted_core::edit::{self, Assignment, EditOptions, Outcome};
use ted_core::ValueKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ted",
    version,
    about = "Read or set values in a TOML document by dotted path"
)]
struct Cli {
    /// .-separated path for the value to read or change
    #[arg(short, long)]
    path: Option<String>,

    /// Value to set at --path; omit to print the current value instead
    #[arg(short, long)]
    value: Option<String>,

    /// TOML file to modify; otherwise reads from stdin and writes to stdout
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Type of --value (bool, uint, int, string, float, time, or b, u, i, s, f, t)
    #[arg(short = 't', long = "type", default_value = "s")]
    kind: String,

    /// path=value to set as a string (repeatable)
    #[arg(long, value_name = "PATH=VALUE")]
    set_string: Vec<String>,

    /// path=value to set as a bool (repeatable)
    #[arg(long, value_name = "PATH=VALUE")]
    set_bool: Vec<String>,

    /// path=value to set as a signed integer (repeatable)
    #[arg(long, value_name = "PATH=VALUE")]
    set_int: Vec<String>,

    /// path=value to set as an unsigned integer (repeatable)
    #[arg(long, value_name = "PATH=VALUE")]
    set_uint: Vec<String>,

    /// path=value to set as a float (repeatable)
    #[arg(long, value_name = "PATH=VALUE")]
    set_float: Vec<String>,

    /// path=value to set as an RFC 3339 timestamp (repeatable)
    #[arg(long, value_name = "PATH=VALUE")]
    set_time: Vec<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Collect the `--set-*` flags, grouped by kind in the order listed above.
    fn assignments(&self) -> Result<Vec<Assignment>> {
        let groups = [
            (ValueKind::String, &self.set_string),
            (ValueKind::Bool, &self.set_bool),
            (ValueKind::Int, &self.set_int),
            (ValueKind::UInt, &self.set_uint),
            (ValueKind::Float, &self.set_float),
            (ValueKind::Time, &self.set_time),
        ];
        let mut assignments = Vec::new();
        for (kind, pairs) in groups {
            for pair in pairs {
                assignments.push(
                    Assignment::parse(kind, pair)
                        .with_context(|| format!("Invalid --set-{} argument", kind.name()))?,
                );
            }
        }
        Ok(assignments)
    }

    fn edit_options(&self) -> Result<EditOptions> {
        Ok(EditOptions {
            path: self.path.clone(),
            value: self.value.clone(),
            kind: self.kind.clone(),
            assignments: self.assignments()?,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let options = cli.edit_options()?;
    let input = read_input(cli.file.as_deref())?;

    match edit::run(&input, &options).context("Failed to edit document")? {
        Outcome::Print(text) => print!("{}", text),
        Outcome::NotFound => {
            tracing::warn!(path = ?options.path, "no value at path");
        }
        Outcome::Write(toml) => write_output(cli.file.as_deref(), &toml)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the document or the value.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
