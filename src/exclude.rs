//! Exclusion filter over project-relative paths.

use crate::error::ExportError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Immutable set of project-relative paths to skip.
///
/// Plain entries are matched exactly after normalization. Entries that contain
/// glob metacharacters are compiled into a [`GlobSet`] and matched against the
/// same normalized form.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    root: PathBuf,
    paths: HashSet<String>,
    globs: Option<GlobSet>,
}
impl ExclusionSet {
    pub fn new<I, S>(root: impl Into<PathBuf>, entries: I) -> Result<Self, ExportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut paths = HashSet::new();
        let mut builder = GlobSetBuilder::new();
        let mut patterns = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            let normalized = normalize(Path::new(entry));
            if is_glob(entry) {
                let glob = Glob::new(&normalized).map_err(|e| ExportError::InvalidPattern {
                    pattern: entry.to_string(),
                    message: e.to_string(),
                })?;
                builder.add(glob);
                patterns.push(entry.to_string());
            } else {
                paths.insert(normalized);
            }
        }
        let globs = if patterns.is_empty() {
            None
        } else {
            Some(builder.build().map_err(|e| ExportError::InvalidPattern {
                pattern: patterns.join(", "),
                message: e.to_string(),
            })?)
        };
        Ok(Self {
            root: root.into(),
            paths,
            globs,
        })
    }

    /// Returns true when `path` (absolute, or relative to the working
    /// directory like the root) is on the exclusion list.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = self.relative(path);
        if self.paths.contains(&relative) {
            return true;
        }
        self.globs
            .as_ref()
            .is_some_and(|globs| globs.is_match(&relative))
    }

    /// Path of `path` relative to the project root, with `/` separators.
    pub fn relative(&self, path: &Path) -> String {
        let stripped = path.strip_prefix(&self.root).unwrap_or(path);
        normalize(stripped)
    }

    pub fn len(&self) -> usize {
        self.paths.len() + self.globs.as_ref().map_or(0, GlobSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
/// Joins the normal components of `path` with `/`, dropping `.` components.
pub(crate) fn normalize(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::RootDir | Component::Prefix(_) => {
                parts.clear();
                parts.push(String::new());
            }
        }
    }
    if parts == [""] {
        return "/".to_string();
    }
    parts.join("/")
}
fn is_glob(entry: &str) -> bool {
    entry.contains(['*', '?', '[', '{'])
}
