use dartcat::{ExportBuilder, ExportError, export};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let lib = dir.path().join("lib");
    fs::create_dir_all(lib.join("src")).unwrap();
    fs::write(lib.join("main.dart"), "void main() {\n  run();\n}\n").unwrap();
    fs::write(lib.join("src/app.dart"), "void run() {}\n").unwrap();
    fs::write(lib.join("build_info.dart"), "const build = 1;\n").unwrap();
    let options = ExportBuilder::new(dir.path()).build();
    let report = export(&options).unwrap();
    assert_eq!(report.file_count, 2);
    assert_eq!(report.output_path, dir.path().join("dart_export.txt"));
    let written = fs::read_to_string(&report.output_path).unwrap();
    assert!(written.starts_with("Directory structure of the lib folder:\n\n├── src/\n"));
    assert!(written.contains("// ==== lib/src/app.dart ====\n\n1: void run() {}\n"));
    assert!(written.contains("// ==== lib/main.dart ====\n\n1: void main() {\n2:   run();\n3: }\n"));
    assert!(!written.contains("build_info"));
}
#[test]
fn missing_source_dir_leaves_existing_output_alone() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("dart_export.txt");
    fs::write(&output, "previous run").unwrap();
    let options = ExportBuilder::new(dir.path()).build();
    let err = export(&options).unwrap_err();
    assert!(matches!(err, ExportError::RootNotFound(_)));
    assert!(err.to_string().contains("lib"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run");
}
#[test]
fn output_in_subdirectory_and_custom_extension() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::create_dir_all(dir.path().join("out")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn test() {}").unwrap();
    fs::write(dir.path().join("src/main.dart"), "void main() {}").unwrap();
    let options = ExportBuilder::new(dir.path())
        .source_dir("src")
        .extension(".rs")
        .output_file("out/export.txt")
        .include_line_numbers(false)
        .build();
    let report = export(&options).unwrap();
    assert_eq!(report.file_count, 1);
    let written = fs::read_to_string(dir.path().join("out/export.txt")).unwrap();
    assert!(written.contains("└── lib.rs\n"));
    assert!(written.ends_with("// ==== src/lib.rs ====\n\npub fn test() {}\n"));
    assert!(!written.contains("main.dart"));
}
