use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Files skipped unless the caller replaces the exclusion list.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "lib/generated/build_info.dart",
    "lib/build_info.dart",
    ".dart_tool/flutter_build/dart_plugin_registrant.dart",
];

/// Fill used when right-aligning line numbers.
///
/// Defaults to [`LineNumberPadding::Zero`] (`01: `), the layout of the export
/// format. [`LineNumberPadding::Space`] (` 1: `) is the `padStart`-style
/// alternative selected with `--pad-spaces`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineNumberPadding {
    /// `01: `
    Zero,
    /// ` 1: `
    Space,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub project_root: PathBuf,
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
    pub include_line_numbers: bool,
    pub line_number_padding: LineNumberPadding,
    pub extension: String,
    pub excluded_files: Vec<String>,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
}
impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source_dir: PathBuf::from("lib"),
            output_file: PathBuf::from("dart_export.txt"),
            include_line_numbers: true,
            line_number_padding: LineNumberPadding::Zero,
            extension: "dart".to_string(),
            excluded_files: DEFAULT_EXCLUDED_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            respect_gitignore: false,
            include_hidden: true,
            follow_links: true,
        }
    }
}
impl ExportOptions {
    /// Loads options from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|e| ExportError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The directory that is actually scanned.
    pub fn scan_dir(&self) -> PathBuf {
        self.project_root.join(&self.source_dir)
    }

    /// Destination of the export; relative paths resolve against the project root.
    pub fn output_path(&self) -> PathBuf {
        if self.output_file.is_absolute() {
            self.output_file.clone()
        } else {
            self.project_root.join(&self.output_file)
        }
    }

    /// The target extension without a leading dot.
    pub(crate) fn bare_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}
#[derive(Debug, Default)]
pub struct ExportBuilder {
    options: ExportOptions,
}
impl ExportBuilder {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            options: ExportOptions {
                project_root: project_root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: ExportOptions) -> Self {
        Self { options }
    }
    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.project_root = root.into();
        self
    }
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.source_dir = dir.into();
        self
    }
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_file = path.into();
        self
    }
    pub fn include_line_numbers(mut self, yes: bool) -> Self {
        self.options.include_line_numbers = yes;
        self
    }
    pub fn line_number_padding(mut self, padding: LineNumberPadding) -> Self {
        self.options.line_number_padding = padding;
        self
    }
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.options.extension = ext.into();
        self
    }
    pub fn excluded_files(mut self, files: Vec<String>) -> Self {
        self.options.excluded_files = files;
        self
    }
    pub fn exclude(mut self, file: impl Into<String>) -> Self {
        self.options.excluded_files.push(file.into());
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> ExportOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dart_layout() {
        let options = ExportOptions::default();
        assert_eq!(options.scan_dir(), PathBuf::from("./lib"));
        assert_eq!(options.output_path(), PathBuf::from("./dart_export.txt"));
        assert!(options.include_line_numbers);
        assert_eq!(options.excluded_files.len(), 3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options: ExportOptions =
            serde_json::from_str(r#"{"extension": ".rs", "line_number_padding": "space"}"#)
                .unwrap();
        assert_eq!(options.bare_extension(), "rs");
        assert_eq!(options.line_number_padding, LineNumberPadding::Space);
        assert_eq!(options.source_dir, PathBuf::from("lib"));
    }

    #[test]
    fn absolute_output_is_kept() {
        let abs = std::env::temp_dir().join("out.txt");
        let options = ExportBuilder::new("/project").output_file(&abs).build();
        assert_eq!(options.output_path(), abs);
    }
}
