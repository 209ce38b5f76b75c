// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::consts::{EXPORT_EXT, EXPORT_SUFFIX},
    core::sanitize::sanitize_file_component,
    csv::to_export_string,
    decade::Decade,
    recommend::{Recommendation, export_headers},
};

/// `{character}_{decade}_comics.csv`
pub fn export_file_name(character: &str, decade: Decade) -> String {
    let stem = sanitize_file_component(character);
    format!("{stem}_{}{EXPORT_SUFFIX}.{EXPORT_EXT}", decade.label())
}

/// Full CSV document for a set of recommendations, header included.
pub fn recommendations_to_csv(items: &[Recommendation]) -> String {
    let headers = export_headers();
    let rows: Vec<Vec<String>> = items.iter().map(Recommendation::to_row).collect();
    to_export_string(Some(headers.as_slice()), &rows)
}

/// Write the CSV to `path`, creating parent directories. Returns the path written.
pub fn write_export(path: &Path, items: &[Recommendation]) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, recommendations_to_csv(items))?;
    logf!("Export: Wrote {} row(s) → {}", items.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
