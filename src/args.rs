use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Arguments {
    /// Path to the user list document
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,
}

/// CLI argument handler.
pub struct ArgHandler {
    data: Arguments,
}

impl ArgHandler {
    pub fn parse() -> ArgHandler {
        ArgHandler {
            data: Arguments::parse(),
        }
    }

    /// Get the input path, prompting on the terminal if none was given.
    pub fn input_path(&self) -> Result<PathBuf> {
        match &self.data.input {
            Some(path) => Ok(path.clone()),
            None => prompt_for_path(),
        }
    }
}

/// Ask for the input path interactively and read one line from stdin.
fn prompt_for_path() -> Result<PathBuf> {
    print!("User list filepath: ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input path from stdin")?;
    Ok(PathBuf::from(line.trim()))
}
