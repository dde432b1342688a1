//! Command-line interface for dartcat.
//!
//! Scans `<root>/<source-dir>`, renders its tree and writes the tree plus
//! every matching file's contents to one export file.

use clap::Parser;
use dartcat::{
    DEFAULT_EXCLUDED_FILES, ExportBuilder, ExportError, ExportOptions, LineNumberPadding,
    build_document, export,
};
use std::path::PathBuf;
use std::process::exit;

/// dartcat — export a source tree into a single annotated text file
#[derive(Parser, Debug)]
#[command(name = "dartcat", version, about, long_about = None)]
struct Cli {
    /// Project root (default current dir)
    root: Option<PathBuf>,

    /// JSON options file; flags given on the command line take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory under the root to scan
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output file, relative to the root unless absolute
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File extension to export
    #[arg(short, long)]
    extension: Option<String>,

    /// Extra project-relative paths or globs to skip (can be repeated)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Drop the built-in exclusion list
    #[arg(long)]
    no_default_excludes: bool,

    /// Write file contents without line numbers
    #[arg(long)]
    no_line_numbers: bool,

    /// Pad line numbers with spaces instead of zeros
    #[arg(long)]
    pad_spaces: bool,

    /// Honour .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Do not follow symlinks
    #[arg(long)]
    no_follow_links: bool,

    /// Print the export to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_options(self) -> Result<ExportOptions, ExportError> {
        let mut base = match &self.config {
            Some(path) => ExportOptions::from_json_file(path)?,
            None => ExportOptions::default(),
        };
        if self.no_default_excludes {
            base.excluded_files
                .retain(|f| !DEFAULT_EXCLUDED_FILES.contains(&f.as_str()));
        }
        let mut builder = ExportBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.project_root(root);
        }
        if let Some(dir) = self.source_dir {
            builder = builder.source_dir(dir);
        }
        if let Some(output) = self.output {
            builder = builder.output_file(output);
        }
        if let Some(ext) = self.extension {
            builder = builder.extension(ext);
        }
        for pattern in self.exclude {
            builder = builder.exclude(pattern);
        }
        if self.no_line_numbers {
            builder = builder.include_line_numbers(false);
        }
        if self.pad_spaces {
            builder = builder.line_number_padding(LineNumberPadding::Space);
        }
        if self.gitignore {
            builder = builder.respect_gitignore(true);
        }
        if self.no_hidden {
            builder = builder.include_hidden(false);
        }
        if self.no_follow_links {
            builder = builder.follow_links(false);
        }
        Ok(builder.build())
    }
}

/// A missing scan directory is reported but is not a failure.
fn exit_code(error: &ExportError) -> i32 {
    match error {
        ExportError::RootNotFound(_) => 0,
        _ => 1,
    }
}

fn fail(error: ExportError) -> ! {
    eprintln!("Error: {}", error);
    exit(exit_code(&error));
}

#[cfg(feature = "logging")]
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::new()
        .parse_filters(level)
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    setup_logging(cli.verbose);

    let to_stdout = cli.stdout;
    let options = match cli.into_options() {
        Ok(options) => options,
        Err(e) => fail(e),
    };

    if to_stdout {
        match build_document(&options) {
            Ok(document) => print!("{}", document.render()),
            Err(e) => fail(e),
        }
        return;
    }

    match export(&options) {
        Ok(report) => println!(
            "Exported {} files to {}",
            report.file_count,
            report.output_path.display()
        ),
        Err(e) => fail(e),
    }
}
