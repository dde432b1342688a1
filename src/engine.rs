use crate::content::collect_blocks;
use crate::error::ExportError;
use crate::exclude::{ExclusionSet, normalize};
use crate::options::ExportOptions;
use crate::tree::render_tree;
use crate::types::{ExportDocument, ExportReport};
use crate::walk::Scanner;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
#[cfg(feature = "logging")]
use tracing;

/// Renders the tree and collects file contents without writing anything.
///
/// # Errors
///
/// Returns [`ExportError::RootNotFound`] when the scan directory is missing,
/// and propagates any listing or read failure.
pub fn build_document(options: &ExportOptions) -> Result<ExportDocument, ExportError> {
    let scan_dir = options.scan_dir();
    if !scan_dir.is_dir() {
        return Err(ExportError::RootNotFound(scan_dir));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Starting export of {}", scan_dir.display());
    let exclusions = ExclusionSet::new(&options.project_root, &options.excluded_files)?;
    let scanner = Scanner::new(options, &exclusions);
    let tree = render_tree(&scanner, &scan_dir, "")?;
    let files = collect_blocks(&scanner, &scan_dir)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Collected {} files", files.len());
    Ok(ExportDocument {
        tree_label: format!(
            "Directory structure of the {} folder:",
            normalize(&options.source_dir)
        ),
        tree,
        files,
    })
}

/// Builds the document and writes it to [`ExportOptions::output_path`],
/// replacing any existing file.
pub fn export(options: &ExportOptions) -> Result<ExportReport, ExportError> {
    let document = build_document(options)?;
    let text = document.render();
    let output_path = options.output_path();
    write_atomic(&output_path, text.as_bytes())?;
    #[cfg(feature = "logging")]
    tracing::debug!("Wrote {} bytes to {}", text.len(), output_path.display());
    Ok(ExportReport {
        output_path,
        file_count: document.files.len(),
        bytes_written: text.len(),
    })
}

/// Writes `bytes` to a temporary file next to `path`, then renames it over
/// `path`. On failure the temporary file is removed and `path` is untouched.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(parent).map_err(|e| ExportError::io(parent, e))?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| ExportError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| ExportError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ExportBuilder;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn document_layout() {
        let dir = tempdir().unwrap();
        let lib = dir.path().join("lib");
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join("main.dart"), "void main() {}\n").unwrap();
        let options = ExportBuilder::new(dir.path()).build();

        let text = build_document(&options).unwrap().render();
        let expected = format!(
            "Directory structure of the lib folder:\n\n\
             └── main.dart\n\n\n\
             {}\n\n\
             File contents:\n\
             \n// ==== lib/main.dart ====\n\n\
             1: void main() {{}}\n\n",
            "=".repeat(80)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn missing_root_writes_nothing() {
        let dir = tempdir().unwrap();
        let options = ExportBuilder::new(dir.path()).build();
        let err = export(&options).unwrap_err();
        assert!(matches!(err, ExportError::RootNotFound(_)));
        assert!(!options.output_path().exists());
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/a.dart"), "a").unwrap();
        let options = ExportBuilder::new(dir.path()).build();
        fs::write(options.output_path(), "stale").unwrap();

        let report = export(&options).unwrap();
        assert_eq!(report.file_count, 1);
        let written = fs::read_to_string(&report.output_path).unwrap();
        assert_eq!(written.len(), report.bytes_written);
        assert!(!written.contains("stale"));
    }
}
