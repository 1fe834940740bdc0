//! Reading puzzle input files and splitting them into the shapes days work with.

use std::io::ErrorKind;
use std::path::Path;

use crate::HarnessError;

/// Reads a whole input file. A missing file gets its own error so the runner can skip the day.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, HarnessError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => HarnessError::InputNotFound(path.to_owned()),
        _ => HarnessError::Io {path: path.to_owned(), source},
    })
}

/// Non-empty lines with surrounding whitespace stripped.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Every line as written, minus trailing blank lines. Column-aligned inputs need the padding.
pub fn raw_lines(text: &str) -> Vec<&str> {
    let mut lines = text.lines().map(|line| line.trim_end_matches('\r')).collect::<Vec<_>>();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {lines.pop();}
    lines
}

/// Blank-line separated groups of stripped, non-empty lines.
pub fn groups(text: &str) -> Vec<Vec<&str>> {
    let mut groups = vec![];
    let mut group = vec![];
    for line in text.lines().map(str::trim) {
        if !line.is_empty() {
            group.push(line);
        } else if !group.is_empty() {
            groups.push(std::mem::take(&mut group));
        }
    }
    if !group.is_empty() {groups.push(group)}
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_skip_blanks_and_trim() {
        assert_eq!(lines("  a \n\n b\n   \n").collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn raw_lines_keep_padding() {
        assert_eq!(raw_lines(" 1 \r\n  2\n\n  \n"), [" 1 ", "  2"]);
    }

    #[test]
    fn groups_split_on_blank_lines() {
        let text = "\n1-2\n3-4\n\n\n5\n 6 \n";
        assert_eq!(groups(text), vec![vec!["1-2", "3-4"], vec!["5", "6"]]);
    }

    #[test]
    fn missing_file_is_reported_as_such() {
        let err = read_input("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, HarnessError::InputNotFound(_)));
    }
}
