//! Run one exercise on an input line.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use qforge_challenges::runners::Exercise;

use crate::OutputFormat;

/// Where the input comes from and how the result is printed.
pub struct Io<'a> {
    pub input: Option<&'a Path>,
    pub format: OutputFormat,
}

/// Read the first line of `path`, or of stdin when no path is given.
pub fn read_input_line(path: Option<&Path>) -> Result<String> {
    let line = match path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            source.lines().next().unwrap_or_default().to_string()
        }
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read from stdin")?;
            line
        }
    };
    Ok(line.trim().to_string())
}

/// Render a result in the requested format.
pub fn render<T>(output: &T, format: OutputFormat) -> Result<String>
where
    T: std::fmt::Display + serde::Serialize,
{
    match format {
        OutputFormat::Text => Ok(output.to_string()),
        OutputFormat::Json => serde_json::to_string(output).context("Failed to serialize result"),
    }
}

/// Execute an exercise command.
pub fn execute<E: Exercise>(exercise: &E, io: &Io<'_>) -> Result<()> {
    let line = read_input_line(io.input)?;
    debug!(exercise = E::NAME, input = %line, "read input");
    let output = exercise
        .solve(&line)
        .with_context(|| format!("{} failed", E::NAME))?;
    println!("{}", render(&output, io.format)?);
    Ok(())
}
