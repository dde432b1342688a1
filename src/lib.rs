//! # Dartcat
//!
//! `dartcat` snapshots a project's source directory into one text file: an
//! outline of the directory tree followed by the contents of every source file
//! with a given extension, each under a `// ==== path ====` header and
//! optionally line-numbered.
//!
//! Both passes walk the directory in the same order (directories first, then
//! files, each alphabetically), so every file listed in the tree has exactly
//! one content block.
//!
//! # Features
//!
//! - `logging` (default): emits `tracing` debug events while walking, reading
//!   and writing.
//!
//! # Example
//!
//! ```no_run
//! use dartcat::{ExportBuilder, export};
//!
//! let options = ExportBuilder::new(".")
//!     .source_dir("lib")
//!     .output_file("dart_export.txt")
//!     .exclude("lib/l10n/**")
//!     .build();
//!
//! let report = export(&options).expect("export failed");
//! println!("Exported {} files to {}", report.file_count, report.output_path.display());
//! ```

mod content;
mod engine;
mod error;
mod exclude;
mod options;
mod tree;
mod types;
mod walk;

pub use content::{collect, collect_blocks, number_lines};
pub use engine::{build_document, export};
pub use error::ExportError;
pub use exclude::ExclusionSet;
pub use options::{DEFAULT_EXCLUDED_FILES, ExportBuilder, ExportOptions, LineNumberPadding};
pub use tree::render_tree;
pub use types::{BANNER_WIDTH, ExportDocument, ExportReport, FileBlock};
pub use walk::{DirectoryEntry, Scanner, compare_entries};
