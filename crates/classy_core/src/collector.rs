use anyhow::{Context, Result};
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::constants::{HIDDEN_PREFIX, MARKUP_EXTENSIONS};

/// Collect every markup file below `root`.
///
/// Directories whose name starts with a dot are pruned (the root itself is
/// always walked). Entries come back sorted by file name within each
/// directory. The first walk error aborts the collection.
pub fn collect_markup_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Collecting markup files");
    let mut files: Vec<PathBuf> = Vec::new();
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|dent| {
            let hidden_dir = dent.depth() > 0
                && dent.file_type().is_some_and(|ft| ft.is_dir())
                && dent.file_name().to_string_lossy().starts_with(HIDDEN_PREFIX);
            if hidden_dir {
                trace!("Skipping hidden directory: {}", dent.path().display());
            }
            !hidden_dir
        })
        .build();

    for res in walker {
        let dent = res.with_context(|| format!("Failed to walk {}", root.display()))?;
        if dent.file_type().is_none_or(|ft| ft.is_dir()) {
            continue;
        }

        let p = dent.path();
        if is_markup_file(p) {
            trace!("Found markup file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }
    debug!("Collected {} markup files", files.len());
    Ok(files)
}

fn is_markup_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_collects_allowed_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "index.html", "");
        create_test_file(root, "old.htm", "");
        create_test_file(root, "style.css", "");
        create_test_file(root, "page.HTML", "");
        create_test_file(root, "notes.html.bak", "");
        create_test_file(root, "README", "");

        let files = collect_markup_files(root).unwrap();
        assert_eq!(relative(root, &files), vec!["index.html", "old.htm"]);
    }

    #[test]
    fn test_skips_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "a.html", "");
        create_test_file(root, ".git/b.html", "");
        create_test_file(root, "site/.cache/c.html", "");
        create_test_file(root, "site/d.html", "");

        let files = collect_markup_files(root).unwrap();
        assert_eq!(relative(root, &files), vec!["a.html", "site/d.html"]);
    }

    #[test]
    fn test_keeps_hidden_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, ".draft.html", "");

        let files = collect_markup_files(root).unwrap();
        assert_eq!(relative(root, &files), vec![".draft.html"]);
    }

    #[test]
    fn test_ignores_gitignore() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, ".gitignore", "build/\n");
        create_test_file(root, "build/out.html", "");

        let files = collect_markup_files(root).unwrap();
        assert_eq!(relative(root, &files), vec!["build/out.html"]);
    }

    #[test]
    fn test_hidden_root_is_walked() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(".site");
        create_test_file(&root, "index.html", "");

        let files = collect_markup_files(&root).unwrap();
        assert_eq!(relative(&root, &files), vec!["index.html"]);
    }

    #[test]
    fn test_sorted_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "c.html", "");
        create_test_file(root, "a.html", "");
        create_test_file(root, "b/z.html", "");

        let files = collect_markup_files(root).unwrap();
        assert_eq!(relative(root, &files), vec!["a.html", "b/z.html", "c.html"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = collect_markup_files(&temp_dir.path().join("nope"));
        assert!(result.is_err());
    }
}
