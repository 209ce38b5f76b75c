// src/config/options.rs
use std::env;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::decade::Decade;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub query: QueryOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            query: QueryOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults plus the `MARVEL_API_BASE` override, if set.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(base) = env::var(ENV_API_BASE) {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                logf!("Config: API base override → {}", base);
                opts.query.base_url = s!(base);
            }
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub base_url: String,
    /// Max comics requested per recommendation cycle.
    pub limit: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            base_url: s!(API_BASE),
            limit: DEFAULT_COMIC_LIMIT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    /// Set when the user typed a full file path; otherwise the file name is
    /// derived from the current character + decade.
    custom_file: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            custom_file: None,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path { &self.out_dir }

    pub fn has_custom_file(&self) -> bool { self.custom_file.is_some() }

    /// Final export path for this selection.
    pub fn out_path(&self, character: &str, decade: Decade) -> PathBuf {
        match &self.custom_file {
            Some(p) => p.clone(),
            None => self.out_dir.join(crate::file::export_file_name(character, decade)),
        }
    }

    /// Parse GUI/CLI text. A trailing separator or an existing directory means
    /// "directory, derive the name"; anything else is taken as the file path.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.reset_path();
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));
        if crate::file::looks_like_dir_hint(Path::new(s)) || p.is_dir() {
            self.out_dir = p;
            self.custom_file = None;
        } else {
            self.custom_file = Some(p);
        }
    }

    pub fn reset_path(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_derived_from_selection() {
        let opts = ExportOptions::default();
        let p = opts.out_path("Spider-Man", Decade::D1960s);
        assert_eq!(p, PathBuf::from("out").join("Spider-Man_1960s_comics.csv"));
    }

    #[test]
    fn trailing_separator_sets_directory_only() {
        let mut opts = ExportOptions::default();
        opts.set_path("exports/");
        assert!(!opts.has_custom_file());
        let p = opts.out_path("Hulk", Decade::D1970s);
        assert!(p.to_string_lossy().ends_with("Hulk_1970s_comics.csv"));
        assert!(p.starts_with("exports"));
    }

    #[test]
    fn explicit_file_is_kept_verbatim() {
        let mut opts = ExportOptions::default();
        opts.set_path("picks/mine.txt");
        assert!(opts.has_custom_file());
        let p = opts.out_path("Hulk", Decade::D1970s);
        assert!(p.to_string_lossy().ends_with("mine.txt"));

        opts.set_path("   ");
        assert_eq!(opts, ExportOptions::default());
    }
}
