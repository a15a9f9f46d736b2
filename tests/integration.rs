//! Integration tests for dirtree


use harness::{TestDir, run_dirtree};

#[test]
fn test_round_trip_with_files() {
    let dir = TestDir::new();
    dir.add_file("root/sub/x.txt", "");
    dir.add_file("root/y.txt", "0123456789");

    let (stdout, stderr, success) = run_dirtree(dir.path(), &["root", "-f"]);
    assert!(success, "dirtree should succeed: {}", stderr);
    assert_eq!(stdout, "├───sub\n│\t└───x.txt (empty)\n└───y.txt (10b)\n");
}

#[test]
fn test_files_hidden_without_flag() {
    let dir = TestDir::new();
    dir.add_file("root/sub/x.txt", "");
    dir.add_file("root/y.txt", "0123456789");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["root"]);
    assert!(success);
    assert_eq!(stdout, "└───sub\n");
}

#[test]
fn test_other_second_argument_means_no_files() {
    let dir = TestDir::new();
    dir.add_file("root/a/file.txt", "abc");

    for flag in ["--files", "f", "-F", "-ff"] {
        let (stdout, _stderr, success) = run_dirtree(dir.path(), &["root", flag]);
        assert!(success, "'{}' should be accepted", flag);
        assert_eq!(stdout, "└───a\n", "'{}' must not enable files", flag);
    }
}

#[test]
fn test_empty_directory_prints_nothing() {
    let dir = TestDir::new();
    dir.add_dir("root");

    for args in [&["root"][..], &["root", "-f"][..]] {
        let (stdout, _stderr, success) = run_dirtree(dir.path(), args);
        assert!(success);
        assert!(stdout.is_empty(), "expected no output, got: {}", stdout);
    }
}

#[test]
fn test_only_files_without_flag_prints_nothing() {
    let dir = TestDir::new();
    dir.add_file("root/a.txt", "a");
    dir.add_file("root/b.txt", "b");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["root"]);
    assert!(success);
    assert!(stdout.is_empty(), "expected no output, got: {}", stdout);
}

#[test]
fn test_mixed_entries_sorted() {
    let dir = TestDir::new();
    dir.add_file("root/b", "bb");
    dir.add_dir("root/a");
    dir.add_file("root/c", "");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["root", "-f"]);
    assert!(success);
    assert_eq!(stdout, "├───a\n├───b (2b)\n└───c (empty)\n");
}

#[test]
fn test_nested_prefixes() {
    let dir = TestDir::new();
    dir.add_file("root/first/deep/leaf.txt", "1");
    dir.add_file("root/last/one.txt", "");
    dir.add_file("root/last/two.txt", "42 bytes long.............................");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["root", "-f"]);
    assert!(success);
    assert_eq!(
        stdout,
        "├───first\n\
         │\t└───deep\n\
         │\t\t└───leaf.txt (1b)\n\
         └───last\n\
         \t├───one.txt (empty)\n\
         \t└───two.txt (42b)\n"
    );
}

#[test]
fn test_current_directory_argument() {
    let dir = TestDir::new();
    dir.add_dir("alpha");
    dir.add_dir("beta");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["."]);
    assert!(success);
    assert_eq!(stdout, "├───alpha\n└───beta\n");
}

#[test]
fn test_absolute_path_argument() {
    let dir = TestDir::new();
    dir.add_file("x/y/z.txt", "zzz");
    let abs = dir.path().join("x");

    let (stdout, _stderr, success) =
        run_dirtree(dir.path(), &[abs.to_str().unwrap(), "-f"]);
    assert!(success);
    assert_eq!(stdout, "└───y\n\t└───z.txt (3b)\n");
}
