//! File and report output.

pub mod output;

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}
