use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Width of the `=` banner between the tree and the file contents.
pub const BANNER_WIDTH: usize = 80;

/// One exported source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBlock {
    /// Path relative to the project root, `/`-separated.
    pub relative_path: String,
    /// The file content as read from disk.
    pub raw_content: String,
    /// The content with line-number prefixes, when numbering is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbered_content: Option<String>,
}
impl FileBlock {
    /// The body written under the header: numbered content if present.
    pub fn body(&self) -> &str {
        self.numbered_content.as_deref().unwrap_or(&self.raw_content)
    }

    /// Appends the header line and body to `out`.
    pub fn render_into(&self, out: &mut String) {
        out.push_str("\n// ==== ");
        out.push_str(&self.relative_path);
        out.push_str(" ====\n\n");
        out.push_str(self.body());
        out.push('\n');
    }
}

/// The complete export, ready to be written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Label printed above the tree.
    pub tree_label: String,
    /// The rendered directory tree.
    pub tree: String,
    /// Every exported file in traversal order.
    pub files: Vec<FileBlock>,
}
impl ExportDocument {
    /// Concatenation of all file blocks.
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for file in &self.files {
            file.render_into(&mut out);
        }
        out
    }

    /// The full text of the export file.
    pub fn render(&self) -> String {
        let contents = self.contents();
        let mut out = String::with_capacity(self.tree.len() + contents.len() + 256);
        out.push_str(&self.tree_label);
        out.push_str("\n\n");
        out.push_str(&self.tree);
        out.push_str("\n\n");
        out.push_str(&"=".repeat(BANNER_WIDTH));
        out.push_str("\n\nFile contents:\n");
        out.push_str(&contents);
        out
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    pub output_path: PathBuf,
    pub file_count: usize,
    pub bytes_written: usize,
}
