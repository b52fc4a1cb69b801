//! Validate command implementation
//!
//! The prompt hot path swallows mapping-file problems by design; this
//! command is the diagnostic surface where they are reported instead.

use std::path::{Path, PathBuf};

use colored::Colorize;
use secenv_core::{DirIndex, EnvMap, MappingDocument, MappingFormat, NormalizedDir, Settings};

use crate::error::{CliError, Result};

/// Run the validate command: strictly parse and check a mapping file
pub fn run_validate(path: Option<&Path>, env: &EnvMap) -> Result<i32> {
    let settings = Settings::from_env(env);
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => settings
            .mapping_path
            .clone()
            .ok_or_else(|| CliError::user("no mapping file configured and none given"))?,
    };

    if !path.is_file() {
        return Err(CliError::user(format!(
            "mapping file not found: {}",
            path.display()
        )));
    }

    let format = MappingFormat::from_path(&path)?;
    let content = std::fs::read_to_string(&path)?;
    let document = MappingDocument::parse(&content, format, &path)?;

    let mut errors = 0;
    let mut seen: Vec<NormalizedDir> = Vec::new();
    for (raw_dir, target) in document.entries() {
        if target.project.is_empty() || target.config.is_empty() {
            println!(
                "  {} {}: project and config must both be non-empty",
                "x".red(),
                raw_dir
            );
            errors += 1;
            continue;
        }
        let dir = NormalizedDir::new(raw_dir);
        if !raw_dir.starts_with('/') && !raw_dir.contains(":/") && !raw_dir.contains(":\\") {
            println!("  {} {}: not an absolute path", "!".yellow(), raw_dir);
        }
        if seen.contains(&dir) {
            println!(
                "  {} {}: duplicate of an earlier entry (first one wins)",
                "!".yellow(),
                raw_dir
            );
        }
        seen.push(dir);
    }

    if errors > 0 {
        return Err(CliError::user(format!(
            "{errors} invalid entries in {}",
            path.display()
        )));
    }

    let index = DirIndex::from_document(&document)?;
    println!(
        "{} {} — {} directories mapped",
        "OK".green().bold(),
        path.display(),
        index.len()
    );
    Ok(0)
}
