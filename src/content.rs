//! Collects the contents of every qualifying file in traversal order.

use crate::error::ExportError;
use crate::options::LineNumberPadding;
use crate::types::FileBlock;
use crate::walk::{Ancestors, Scanner};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Collects every qualifying file under `directory` and concatenates their
/// header blocks.
pub fn collect(scanner: &Scanner<'_>, directory: &Path) -> Result<String, ExportError> {
    let mut out = String::new();
    for block in collect_blocks(scanner, directory)? {
        block.render_into(&mut out);
    }
    Ok(out)
}

/// Same traversal as [`collect`], returning the blocks instead of the text.
///
/// # Errors
///
/// Listing failures, unreadable files, binary files and invalid UTF-8 all
/// abort the collection. No file is skipped.
pub fn collect_blocks(
    scanner: &Scanner<'_>,
    directory: &Path,
) -> Result<Vec<FileBlock>, ExportError> {
    let mut ancestors = Ancestors::default();
    let mut blocks = Vec::new();
    collect_level(scanner, directory, &mut ancestors, &mut blocks)?;
    Ok(blocks)
}
fn collect_level(
    scanner: &Scanner<'_>,
    directory: &Path,
    ancestors: &mut Ancestors,
    blocks: &mut Vec<FileBlock>,
) -> Result<(), ExportError> {
    ancestors.enter(directory)?;
    for child in scanner.children(directory)? {
        if child.is_dir {
            collect_level(scanner, &child.path, ancestors, blocks)?;
            continue;
        }
        let raw_content = read_source(&child.path)?;
        let options = scanner.options();
        let numbered_content = options
            .include_line_numbers
            .then(|| number_lines(&raw_content, options.line_number_padding));
        blocks.push(FileBlock {
            relative_path: scanner.display_path(&child.path),
            raw_content,
            numbered_content,
        });
    }
    ancestors.leave();
    Ok(())
}
fn read_source(path: &Path) -> Result<String, ExportError> {
    let bytes = fs::read(path).map_err(|e| ExportError::io(path, e))?;
    if content_inspector::inspect(&bytes).is_binary() {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return Err(ExportError::BinaryFile {
            path: path.to_path_buf(),
        });
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    String::from_utf8(bytes).map_err(|_| ExportError::Encoding {
        path: path.to_path_buf(),
    })
}

/// Prefixes every line of `content` with its 1-based number, right-aligned to
/// the width of the last line number, followed by `": "`.
///
/// A trailing newline ends the last line rather than starting a new one, and
/// an empty input stays empty.
pub fn number_lines(content: &str, padding: LineNumberPadding) -> String {
    if content.is_empty() {
        return String::new();
    }
    let (body, trailing_newline) = match content.strip_suffix('\n') {
        Some(body) => (body, true),
        None => (content, false),
    };
    let lines: Vec<&str> = body.split('\n').collect();
    let width = lines.len().to_string().len();
    let mut out = String::with_capacity(content.len() + lines.len() * (width + 2));
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let number = i + 1;
        let _ = match padding {
            LineNumberPadding::Zero => write!(out, "{number:0width$}: {line}"),
            LineNumberPadding::Space => write!(out, "{number:>width$}: {line}"),
        };
    }
    if trailing_newline {
        out.push('\n');
    }
    out
}
