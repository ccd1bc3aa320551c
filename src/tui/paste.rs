//! Turning a bracketed paste (a terminal file drop) into file handles.
//!
//! Terminals deliver dropped files as text: one or more paths separated by
//! whitespace or newlines, quoted or backslash-escaped when they contain
//! spaces, sometimes as `file://` URIs.

use std::path::{Path, PathBuf};

use url::Url;

use crate::core::upload::FileHandle;

/// Split pasted text into paths, honouring single/double quotes and `\`
/// escapes.
pub fn split_paths(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_token = true;
            }
            (None, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    paths.push(to_path(&current));
                    current.clear();
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        paths.push(to_path(&current));
    }
    paths
}

/// `file://` URIs are percent-decoded; anything else is taken literally.
fn to_path(token: &str) -> PathBuf {
    if token.starts_with("file://") {
        if let Some(path) = Url::parse(token).ok().and_then(|url| url.to_file_path().ok()) {
            return path;
        }
    }
    PathBuf::from(token)
}

/// Read metadata for each path. Unreadable paths are returned separately
/// with the reason and never reach upload validation.
pub fn collect_files(paths: &[PathBuf]) -> (Vec<FileHandle>, Vec<(PathBuf, String)>) {
    let mut files = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        match FileHandle::from_path(path) {
            Ok(file) => files.push(file),
            Err(e) => {
                log::warn!("Cannot read dropped path {}: {e}", path.display());
                failures.push((path.clone(), e.to_string()));
            }
        }
    }
    (files, failures)
}

/// Final path component for messages.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/tmp/a.pdf", &["/tmp/a.pdf"])]
    #[case("/tmp/a.pdf /tmp/b.csv", &["/tmp/a.pdf", "/tmp/b.csv"])]
    #[case("/tmp/a.pdf\n/tmp/b.csv\n", &["/tmp/a.pdf", "/tmp/b.csv"])]
    #[case("'/tmp/my file.pdf'", &["/tmp/my file.pdf"])]
    #[case("\"/tmp/my file.pdf\" /x.txt", &["/tmp/my file.pdf", "/x.txt"])]
    #[case("/tmp/my\\ file.pdf", &["/tmp/my file.pdf"])]
    #[case("file:///tmp/a.docx", &["/tmp/a.docx"])]
    #[case("file:///tmp/my%20file.pdf", &["/tmp/my file.pdf"])]
    #[case("file:///tmp/r%C3%A9sum%C3%A9.docx", &["/tmp/résumé.docx"])]
    #[case("   ", &[])]
    fn test_split_paths(#[case] input: &str, #[case] expected: &[&str]) {
        let expected: Vec<PathBuf> = expected.iter().map(PathBuf::from).collect();
        assert_eq!(split_paths(input), expected);
    }

    #[test]
    fn test_dropped_file_uri_with_space_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("my file.pdf");
        std::fs::write(&real, b"%PDF").unwrap();
        let uri = Url::from_file_path(&real).unwrap();
        assert!(uri.as_str().contains("my%20file.pdf"));

        let paths = split_paths(uri.as_str());
        assert_eq!(paths, vec![real]);
        let (files, failures) = collect_files(&paths);
        assert!(failures.is_empty());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "my file.pdf");
    }

    #[test]
    fn test_collect_files_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("scope.txt");
        std::fs::write(&real, b"hello").unwrap();
        let missing = dir.path().join("gone.pdf");

        let (files, failures) = collect_files(&[real, missing.clone()]);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "scope.txt");
        assert_eq!(files[0].size, 5);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, missing);
        assert_eq!(display_name(&failures[0].0), "gone.pdf");
    }
}
