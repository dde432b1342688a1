//! Renders the `tree`-style outline of the scanned directory.

use crate::error::ExportError;
use crate::walk::{Ancestors, Scanner};
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUE: &str = "│   ";
const BLANK: &str = "    ";

/// Renders the children of `directory`, one line per entry, each line
/// starting with `prefix`.
///
/// Subdirectories end with `/` and are always listed, even when nothing
/// inside them qualifies. Only files with the target extension that are not
/// excluded appear.
///
/// # Errors
///
/// Any failure to list a directory aborts the render.
pub fn render_tree(
    scanner: &Scanner<'_>,
    directory: &Path,
    prefix: &str,
) -> Result<String, ExportError> {
    let mut ancestors = Ancestors::default();
    let mut out = String::new();
    render_level(scanner, directory, prefix, &mut ancestors, &mut out)?;
    Ok(out)
}
fn render_level(
    scanner: &Scanner<'_>,
    directory: &Path,
    prefix: &str,
    ancestors: &mut Ancestors,
    out: &mut String,
) -> Result<(), ExportError> {
    ancestors.enter(directory)?;
    let children = scanner.children(directory)?;
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == count;
        out.push_str(prefix);
        out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        out.push_str(&child.name);
        if child.is_dir {
            out.push_str("/\n");
            let nested = format!("{}{}", prefix, if is_last { BLANK } else { CONTINUE });
            render_level(scanner, &child.path, &nested, ancestors, out)?;
        } else {
            out.push('\n');
        }
    }
    ancestors.leave();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exclude::ExclusionSet;
    use crate::options::ExportBuilder;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn renders_connectors_and_nesting() {
        let dir = tempdir().unwrap();
        let lib = dir.path().join("lib");
        fs::create_dir_all(lib.join("models")).unwrap();
        fs::create_dir_all(lib.join("widgets")).unwrap();
        fs::write(lib.join("main.dart"), "").unwrap();
        fs::write(lib.join("models/user.dart"), "").unwrap();
        fs::write(lib.join("models/post.dart"), "").unwrap();
        fs::write(lib.join("widgets/button.dart"), "").unwrap();
        let options = ExportBuilder::new(dir.path()).build();
        let exclusions = ExclusionSet::new(dir.path(), &options.excluded_files).unwrap();
        let scanner = Scanner::new(&options, &exclusions);

        let tree = render_tree(&scanner, &lib, "").unwrap();
        let expected = "\
├── models/
│   ├── post.dart
│   └── user.dart
├── widgets/
│   └── button.dart
└── main.dart
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn last_directory_uses_blank_indent() {
        let dir = tempdir().unwrap();
        let lib = dir.path().join("lib");
        fs::create_dir_all(lib.join("only/deeper")).unwrap();
        fs::write(lib.join("only/deeper/x.dart"), "").unwrap();
        let options = ExportBuilder::new(dir.path()).build();
        let exclusions = ExclusionSet::new(dir.path(), &options.excluded_files).unwrap();
        let scanner = Scanner::new(&options, &exclusions);

        let tree = render_tree(&scanner, &lib, "").unwrap();
        assert_eq!(tree, "└── only/\n    └── deeper/\n        └── x.dart\n");
    }

    #[test]
    fn keeps_directories_without_matching_files() {
        let dir = tempdir().unwrap();
        let lib = dir.path().join("lib");
        fs::create_dir_all(lib.join("assets")).unwrap();
        fs::write(lib.join("assets/logo.png"), [0u8, 1, 2]).unwrap();
        let options = ExportBuilder::new(dir.path()).build();
        let exclusions = ExclusionSet::new(dir.path(), &options.excluded_files).unwrap();
        let scanner = Scanner::new(&options, &exclusions);

        let tree = render_tree(&scanner, &lib, "").unwrap();
        assert_eq!(tree, "└── assets/\n");
    }

    #[test]
    fn prefix_is_applied_to_every_line() {
        let dir = tempdir().unwrap();
        let lib = dir.path().join("lib");
        fs::create_dir_all(lib.join("a")).unwrap();
        fs::write(lib.join("a/b.dart"), "").unwrap();
        let options = ExportBuilder::new(dir.path()).build();
        let exclusions = ExclusionSet::new(dir.path(), &options.excluded_files).unwrap();
        let scanner = Scanner::new(&options, &exclusions);

        let tree = render_tree(&scanner, &lib, "  ").unwrap();
        assert_eq!(tree, "  └── a/\n      └── b.dart\n");
    }
}
