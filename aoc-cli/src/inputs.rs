//! Local puzzle input files

use crate::error::CliError;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Strip trailing whitespace, rejecting input with nothing left
pub fn prepare(raw: &str) -> Result<&str, CliError> {
    let input = raw.trim_end();
    if input.is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(input)
}

/// Read puzzle input from a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    prepare(&raw).map(str::to_string)
}

/// Directory of puzzle inputs
///
/// Directory structure: `{dir}/day{day:02}.txt`
pub struct InputDir {
    dir: PathBuf,
}

impl InputDir {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the input path for a specific day
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.dir.join(format!("day{:02}.txt", day))
    }

    /// Get the input with trailing whitespace removed, or None if missing
    pub fn get(&self, day: u8) -> io::Result<Option<String>> {
        match fs::read_to_string(self.input_path(day)) {
            Ok(content) => Ok(Some(content.trim_end().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
