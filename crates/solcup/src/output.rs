//! Stdout helpers; logs and errors go to stderr

use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

/// Pretty JSON document followed by a newline
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn print_line(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}
