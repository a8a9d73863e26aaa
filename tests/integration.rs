//! Integration tests for codebundle


use harness::{TestTree, codebundle_cmd, read_output, run_codebundle, scenario_tree};
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;

#[test]
fn test_default_report() {
    let tree = scenario_tree();

    let (stdout, stderr, success) = run_codebundle(tree.path(), &[]);
    assert!(success, "codebundle should succeed: {}", stderr);
    assert!(stdout.contains("Scanning directory structure..."));
    assert!(stdout.contains("Found 2 code files in 2 directories"));
    assert!(stdout.contains("Successfully generated: code.txt"));

    let report = read_output(&tree.path().join("code.txt"));
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[1], "CODEBASE SUMMARY");
    assert_eq!(lines[3], "Total Files: 2");
    assert_eq!(lines[4], "Total Directories: 2");
    assert_eq!(lines[5], "Total Lines of Code: 5");
    assert_eq!(lines[6], format!("Root Directory: {}", tree.root().display()));

    assert!(report.contains("Languages Found:\n  JavaScript: 1 file\n  Python: 1 file\n"));
    assert!(report.contains("Directory Overview:\n  root: 1 file\n  sub: 1 file\n"));
    assert!(report.contains("Code Structure:\n.\n  root.py\nsub\n  b.js\n"));
    assert!(report.contains("File: root.py\n"));
    assert!(report.contains("File: sub/b.js\n"));
    assert!(report.contains("print(f())"));
    assert!(!report.contains("README"), "non-code files are excluded");
    assert!(!report.contains("Language:"));
}

#[test]
fn test_sections_follow_tree_in_key_order() {
    let tree = scenario_tree();
    tree.add_file("a/z.py", "z = 1\n");

    let (_stdout, _stderr, success) = run_codebundle(tree.path(), &[]);
    assert!(success);

    let report = read_output(&tree.path().join("code.txt"));
    let tree_pos = report.find("Code Structure:").unwrap();
    let root_pos = report.find("File: root.py").unwrap();
    let a_pos = report.find("File: a/z.py").unwrap();
    let sub_pos = report.find("File: sub/b.js").unwrap();
    assert!(tree_pos < root_pos);
    assert!(root_pos < a_pos);
    assert!(a_pos < sub_pos);
}

#[test]
fn test_custom_output_path() {
    let tree = scenario_tree();
    tree.add_dir("reports");

    let (stdout, _stderr, success) = run_codebundle(tree.path(), &["-o", "reports/bundle.txt"]);
    assert!(success);
    assert!(stdout.contains("Output file: reports/bundle.txt"));
    assert!(tree.path().join("reports/bundle.txt").exists());
    assert!(!tree.path().join("code.txt").exists());
}

#[test]
fn test_file_size_reported() {
    let tree = scenario_tree();

    let (stdout, _stderr, success) = run_codebundle(tree.path(), &[]);
    assert!(success);

    let size = std::fs::metadata(tree.path().join("code.txt")).unwrap().len();
    assert!(stdout.contains(&format!("File size: {} bytes", size)));
}

#[test]
fn test_explicit_root_argument() {
    let tree = TestTree::new();
    tree.add_file("project/main.go", "package main\n");
    tree.add_file("other/skip.go", "package skip\n");

    let (_stdout, _stderr, success) = run_codebundle(tree.path(), &["project"]);
    assert!(success);

    let report = read_output(&tree.path().join("code.txt"));
    assert!(report.contains("File: main.go"));
    assert!(!report.contains("skip.go"));
    assert!(report.contains("  Go: 1 file"));
}

#[test]
fn test_custom_extensions() {
    let tree = scenario_tree();
    tree.add_file("app.vue", "<template></template>\n");

    let (stdout, _stderr, success) = run_codebundle(tree.path(), &["--extensions", "vue, .SVELTE"]);
    assert!(success);
    assert!(stdout.contains("Added custom extensions: .vue, .svelte"));

    let report = read_output(&tree.path().join("code.txt"));
    assert!(report.contains("Total Files: 3"));
    assert!(report.contains("  Unknown: 1 file"));
    assert!(report.contains("File: app.vue"));
}

#[test]
fn test_enhanced_report() {
    let tree = scenario_tree();
    tree.add_file(
        "sub/c.js",
        "// widget\nclass Widget {}\nfunction build() {}\nconst run = () => 1;\n",
    );

    let (stdout, _stderr, success) = run_codebundle(tree.path(), &["--enhanced"]);
    assert!(success);
    assert!(stdout.contains("Analyzing code and generating output..."));
    assert!(stdout.contains("Code Analysis: 3 functions, 1 classes found"));

    let report = read_output(&tree.path().join("code.txt"));
    assert!(report.contains("Language: Python\nLines: 5 (Code: 3, Comments: 1, Blank: 1)\nFunctions: 1\n"));
    assert!(report.contains("Language: JavaScript\nLines: 4 (Code: 3, Comments: 1, Blank: 0)\nFunctions: 2\nClasses: 1\n"));
    assert!(report.contains("-ROOT-"));
    assert!(report.contains("-SUB-"));
}

#[test]
fn test_preview_writes_nothing() {
    let tree = scenario_tree();

    codebundle_cmd(tree.path())
        .arg("--preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Previewing structure for:"))
        .stdout(predicate::str::contains("Code Structure:\n.\n  root.py\nsub\n  b.js\n"))
        .stdout(predicate::str::contains("Found 2 code files"));

    assert!(!tree.path().join("code.txt").exists());
}

#[test]
fn test_help_prints_examples() {
    let tree = TestTree::new();

    for flag in ["--help", "-h", "help"] {
        codebundle_cmd(tree.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("USAGE EXAMPLES:"))
            .stdout(predicate::str::contains("codebundle --preview"));
    }
    assert!(!tree.path().join("code.txt").exists());
}

#[test]
fn test_json_output() {
    let tree = scenario_tree();

    let (stdout, _stderr, success) = run_codebundle(tree.path(), &["--json", "--enhanced"]);
    assert!(success);
    assert!(!tree.path().join("code.txt").exists());

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["summary"]["total_files"], 2);
    assert_eq!(value["summary"]["total_directories"], 2);
    assert_eq!(value["summary"]["total_lines"], 5);
    assert_eq!(value["summary"]["languages"]["Python"], 1);
    assert_eq!(value["files"][0]["path"], "root.py");
    assert_eq!(value["files"][0]["analysis"]["functions"], 1);
    assert_eq!(value["files"][1]["path"], "sub/b.js");
}

#[test]
fn test_ignore_flag() {
    let tree = scenario_tree();
    tree.add_file("generated/api.py", "x = 1\n");
    tree.add_file("sub/b.min.js", "x\n");

    let (_stdout, _stderr, success) =
        run_codebundle(tree.path(), &["-I", "generated", "--ignore", "*.min.js"]);
    assert!(success);

    let report = read_output(&tree.path().join("code.txt"));
    assert!(report.contains("Total Files: 2"));
    assert!(!report.contains("api.py"));
    assert!(!report.contains("b.min.js"));
}

#[test]
fn test_gitignore_opt_in() {
    let tree = scenario_tree();
    tree.add_file(".gitignore", "secret.py\n");
    tree.add_file("secret.py", "token = 1\n");

    let (_stdout, _stderr, success) = run_codebundle(tree.path(), &[]);
    assert!(success);
    assert!(read_output(&tree.path().join("code.txt")).contains("File: secret.py"));

    let (_stdout, _stderr, success) = run_codebundle(tree.path(), &["--gitignore"]);
    assert!(success);
    assert!(!read_output(&tree.path().join("code.txt")).contains("secret.py"));
}

#[test]
fn test_output_is_idempotent() {
    let tree = scenario_tree();
    tree.add_file("lib/util.rs", "pub fn util() {}\n");

    let (_stdout, _stderr, success) = run_codebundle(tree.path(), &["--enhanced"]);
    assert!(success);
    let first = read_output(&tree.path().join("code.txt"));

    let (_stdout, _stderr, success) = run_codebundle(tree.path(), &["--enhanced"]);
    assert!(success);
    let second = read_output(&tree.path().join("code.txt"));

    assert_eq!(first, second);
}
