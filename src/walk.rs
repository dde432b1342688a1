//! Directory listing shared by the tree renderer and the content collector.

use crate::error::ExportError;
use crate::exclude::ExclusionSet;
use crate::options::ExportOptions;
use ignore::WalkBuilder;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Directories first, then files, each group in collation order.
///
/// Both traversals sort with this function so the tree and the file blocks
/// list entries in the same order.
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Punctuation in root-collation order; all of it sorts before digits.
const PUNCTUATION_ORDER: &str = " _-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Compares names the way a root-locale collator does: punctuation, then
/// digits, then letters ignoring case. Case only breaks ties, lowercase first.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
fn primary_weight(c: char) -> u32 {
    if let Some(rank) = PUNCTUATION_ORDER.find(c) {
        return rank as u32;
    }
    if let Some(digit) = c.to_digit(10) {
        return 0x40 + digit;
    }
    if c.is_ascii_alphabetic() {
        return 0x80 + (c.to_ascii_lowercase() as u32 - 'a' as u32);
    }
    let lower = c.to_lowercase().next().unwrap_or(c);
    0x100 + lower as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

/// Read-only traversal context: the options and the exclusion set built from them.
#[derive(Debug)]
pub struct Scanner<'a> {
    options: &'a ExportOptions,
    exclusions: &'a ExclusionSet,
}
impl<'a> Scanner<'a> {
    pub fn new(options: &'a ExportOptions, exclusions: &'a ExclusionSet) -> Self {
        Self {
            options,
            exclusions,
        }
    }
    pub fn options(&self) -> &ExportOptions {
        self.options
    }
    pub fn exclusions(&self) -> &ExclusionSet {
        self.exclusions
    }

    /// Lists the qualifying children of `dir` in traversal order.
    pub fn children(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, ExportError> {
        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .hidden(!self.options.include_hidden)
            .git_ignore(self.options.respect_gitignore)
            .parents(self.options.respect_gitignore)
            .require_git(false)
            .follow_links(false)
            .max_depth(Some(1));
        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| ExportError::Walk(e.to_string()))?;
            if entry.depth() == 0 {
                continue;
            }
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();
            let kind = if file_type.is_symlink() {
                match self.resolve_link(path)? {
                    Some(kind) => kind,
                    None => continue,
                }
            } else if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                continue;
            };
            let keep = match kind {
                EntryKind::Dir => true,
                EntryKind::File => self.is_target_file(path),
            };
            if keep {
                entries.push(DirectoryEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path: path.to_path_buf(),
                    is_dir: kind == EntryKind::Dir,
                });
            }
        }
        entries.sort_by(compare_entries);
        #[cfg(feature = "logging")]
        tracing::debug!("Listed {} entries in {}", entries.len(), dir.display());
        Ok(entries)
    }

    /// What a symlink points at, or `None` when it should be skipped.
    ///
    /// Links are skipped when following is disabled. A dangling link is only
    /// an error when its name qualifies for export.
    fn resolve_link(&self, path: &Path) -> Result<Option<EntryKind>, ExportError> {
        if !self.options.follow_links {
            return Ok(None);
        }
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Dir)),
            Ok(meta) if meta.is_file() => Ok(Some(EntryKind::File)),
            Ok(_) => Ok(None),
            Err(e) if self.is_target_file(path) => Err(ExportError::io(path, e)),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping dangling link {}: {}", path.display(), _e);
                Ok(None)
            }
        }
    }

    /// True for files with the target extension that are not excluded.
    pub fn is_target_file(&self, path: &Path) -> bool {
        let matches_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.options.bare_extension());
        matches_ext && !self.exclusions.is_excluded(path)
    }

    /// Path shown in file headers: relative to the project root, `/`-separated.
    pub fn display_path(&self, path: &Path) -> String {
        self.exclusions.relative(path)
    }
}

/// Canonical paths of the directories currently being visited.
///
/// Entering a directory whose canonical path is already on the stack means a
/// followed symlink points back at one of its ancestors.
#[derive(Debug, Default)]
pub(crate) struct Ancestors {
    stack: Vec<PathBuf>,
}
impl Ancestors {
    pub(crate) fn enter(&mut self, dir: &Path) -> Result<(), ExportError> {
        let canonical = fs::canonicalize(dir).map_err(|e| ExportError::io(dir, e))?;
        if self.stack.contains(&canonical) {
            #[cfg(feature = "logging")]
            tracing::debug!("Symlink cycle: {} -> {}", dir.display(), canonical.display());
            return Err(ExportError::SymlinkCycle {
                path: dir.to_path_buf(),
            });
        }
        self.stack.push(canonical);
        Ok(())
    }
    pub(crate) fn leave(&mut self) {
        self.stack.pop();
    }
}
