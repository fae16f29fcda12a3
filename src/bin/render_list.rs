//! Reads one list per line from stdin, e.g. `[1, 2, 3]`, and prints each as `1->2->3`.
//!
//! Lines that don't parse are reported and skipped. Set `RUST_LOG` to control the log level.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use binary_trees::linked_list::LinkedList;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read from stdin")?;
        match line.parse::<LinkedList>() {
            Ok(list) => writeln!(out, "{list}").context("failed to write to stdout")?,
            Err(err) => tracing::warn!(line = number + 1, %err, "skipping unparseable list"),
        }
    }

    Ok(())
}
