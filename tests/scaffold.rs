use std::fs;

use aoc2025::scaffold::create_day;
use aoc2025::HarnessError;

#[test]
fn creates_module_input_and_notes() {
    let root = tempfile::tempdir().unwrap();
    let created = create_day(root.path(), 13).unwrap();
    let relative = created.iter().map(|path| path.strip_prefix(root.path()).unwrap().to_owned()).collect::<Vec<_>>();
    assert_eq!(relative, ["src/day13.rs", "inputs/day13.txt", "notes/day13.md"].map(std::path::PathBuf::from));

    let module = fs::read_to_string(root.path().join("src/day13.rs")).unwrap();
    assert!(module.starts_with("//! Day 13."));
    assert!(module.contains("#[cfg(test)]"));
    assert_eq!(fs::read_to_string(root.path().join("inputs/day13.txt")).unwrap(), "");
    let notes = fs::read_to_string(root.path().join("notes/day13.md")).unwrap();
    assert!(notes.contains("## Part 1") && notes.contains("## Part 2") && notes.contains("## Notes"));
}

#[test]
fn refuses_to_overwrite_a_module() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("src")).unwrap();
    fs::write(root.path().join("src/day04.rs"), "// mine").unwrap();
    let err = create_day(root.path(), 4).unwrap_err();
    assert!(matches!(err, HarnessError::AlreadyExists(path) if path.ends_with("src/day04.rs")));
    assert_eq!(fs::read_to_string(root.path().join("src/day04.rs")).unwrap(), "// mine");
    assert!(!root.path().join("notes").exists());
}

#[test]
fn keeps_an_existing_input() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("inputs")).unwrap();
    fs::write(root.path().join("inputs/day05.txt"), "3-5\n").unwrap();
    create_day(root.path(), 5).unwrap();
    assert_eq!(fs::read_to_string(root.path().join("inputs/day05.txt")).unwrap(), "3-5\n");
}
