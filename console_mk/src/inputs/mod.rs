//! Expansion of command-line path patterns into an ordered file list.
//!
//! Patterns are processed in argument order. A pattern without glob
//! metacharacters names one file that must exist; a glob pattern
//! (`src/**/*.cpp`) is matched against a directory walk rooted at its
//! literal prefix, with matches sorted by path so runs are deterministic.
//! Duplicates across patterns keep their first position only, since file
//! order fixes the registry's insertion order and with it the generated
//! table order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use globset::GlobBuilder;
use walkdir::WalkDir;

/// Expands all `patterns` into one ordered, deduplicated file list.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();
    for pattern in patterns {
        for path in expand_one(pattern)? {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }
    Ok(files)
}

fn expand_one(pattern: &str) -> Result<Vec<PathBuf>> {
    if !is_glob(pattern) {
        let path = Path::new(pattern);
        if !path.is_file() {
            bail!("input file '{}' not found", pattern);
        }
        return Ok(vec![path.to_path_buf()]);
    }

    // `*` stays within one path component; only `**` crosses directories.
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .with_context(|| format!("invalid pattern '{pattern}'"))?
        .compile_matcher();

    let root = walk_root(pattern);
    let mut matched: Vec<PathBuf> = WalkDir::new(&root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            let candidate = path.strip_prefix("./").unwrap_or(path);
            matcher.is_match(candidate)
        })
        .collect();
    matched.sort();
    log::debug!("pattern '{pattern}' matched {} file(s)", matched.len());
    Ok(matched)
}

fn is_glob(s: &str) -> bool {
    s.contains(['*', '?', '[', '{'])
}

/// Longest literal directory prefix of a glob pattern, used as the walk
/// root. Falls back to the current directory.
fn walk_root(pattern: &str) -> PathBuf {
    let mut root = PathBuf::new();
    for comp in Path::new(pattern).components() {
        if is_glob(&comp.as_os_str().to_string_lossy()) {
            break;
        }
        root.push(comp);
    }
    if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root
    }
}

// ================= TESTS ==========================

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_walk_root_of_relative_pattern() {
        assert_eq!(walk_root("src/**/*.c"), PathBuf::from("src"));
        assert_eq!(walk_root("**/*.c"), PathBuf::from("."));
        assert_eq!(walk_root("a/b/c.c"), PathBuf::from("a/b/c.c"));
    }

    #[test]
    fn test_is_glob() {
        assert!(is_glob("src/**/*.c"));
        assert!(is_glob("file?.c"));
        assert!(!is_glob("src/console.c"));
    }

    #[test]
    fn test_plain_path_must_exist() {
        let err = expand_patterns(&["no/such/file.c".into()]).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_recursive_glob_finds_nested_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.c"), "").unwrap();
        fs::write(dir.path().join("a.c"), "").unwrap();
        fs::write(dir.path().join("sub/c.c"), "").unwrap();
        fs::write(dir.path().join("sub/d.h"), "").unwrap();

        let pattern = format!("{}/**/*.c", dir.path().display());
        let files = expand_patterns(&[pattern]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names, ["a.c", "b.c", "sub/c.c"]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.c");
        fs::write(&file, "").unwrap();

        let explicit = file.display().to_string();
        let pattern = format!("{}/*.c", dir.path().display());
        let files = expand_patterns(&[explicit.clone(), pattern]).unwrap();
        assert_eq!(files, vec![PathBuf::from(explicit)]);
    }
}
