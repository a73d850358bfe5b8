//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

/// Recursively copy a directory, skipping names matching any ignore pattern.
pub fn copy_dir_all(src: &Path, dst: &Path, ignore: &[Pattern]) -> Result<()> {
    fs::create_dir_all(dst)
        .with_context(|| format!("failed to create directory: {}", dst.display()))?;

    for entry in fs::read_dir(src)
        .with_context(|| format!("failed to read directory: {}", src.display()))?
    {
        let entry = entry?;
        let name = entry.file_name();
        if is_ignored(&name.to_string_lossy(), ignore) {
            continue;
        }

        let src_path = entry.path();
        let dst_path = dst.join(&name);

        if entry.file_type()?.is_dir() {
            copy_dir_all(&src_path, &dst_path, ignore)?;
        } else {
            copy_file(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Copy a file, creating the destination's parent directory if needed.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        ensure_dir(parent)?;
    }
    fs::copy(src, dst).with_context(|| {
        format!("failed to copy {} to {}", src.display(), dst.display())
    })?;
    Ok(())
}

/// Check a file name against a set of glob patterns.
pub fn is_ignored(name: &str, ignore: &[Pattern]) -> bool {
    ignore.iter().any(|p| p.matches(name))
}

/// Compile a list of glob patterns.
pub fn patterns<S: AsRef<str>>(globs: &[S]) -> Result<Vec<Pattern>> {
    globs
        .iter()
        .map(|g| {
            Pattern::new(g.as_ref())
                .with_context(|| format!("invalid glob pattern: {}", g.as_ref()))
        })
        .collect()
}

/// Remove a directory and all its contents, if it exists.
pub fn remove_dir_all_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory: {}", path.display()))?;
    }
    Ok(())
}

/// Remove everything inside a directory but keep the directory itself.
pub fn empty_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(path)
        .with_context(|| format!("failed to read directory: {}", path.display()))?
    {
        let entry = entry?;
        let entry_path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&entry_path)
        } else {
            fs::remove_file(&entry_path)
        }
        .with_context(|| format!("failed to remove {}", entry_path.display()))?;
    }

    Ok(())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write file: {}", path.display()))
}

/// List every file below `root`, sorted, as paths relative to `root`.
///
/// Directories whose name matches an ignore pattern are not descended into.
pub fn walk_files(root: &Path, ignore: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(&e.file_name().to_string_lossy(), ignore));

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if entry.file_type().is_file() {
            files.push(relative_path(root, entry.path()));
        }
    }

    Ok(files)
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// Convert a path to a string using forward slashes, as build files expect.
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_dir_all_with_ignore() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");

        fs::create_dir_all(src.join("__pycache__")).unwrap();
        fs::write(src.join("file.py"), "content").unwrap();
        fs::write(src.join("file.pyc"), "junk").unwrap();
        fs::write(src.join("__pycache__").join("x.pyc"), "junk").unwrap();

        copy_dir_all(&src, &dst, &patterns(&["*.pyc", "__pycache__"]).unwrap()).unwrap();

        assert_eq!(fs::read_to_string(dst.join("file.py")).unwrap(), "content");
        assert!(!dst.join("file.pyc").exists());
        assert!(!dst.join("__pycache__").exists());
    }

    #[test]
    fn test_empty_dir_keeps_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a").join("b")).unwrap();
        fs::write(tmp.path().join("c"), "").unwrap();

        empty_dir(tmp.path()).unwrap();

        assert!(tmp.path().exists());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_walk_files_is_sorted_and_relative() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("pkg").join("sub")).unwrap();
        fs::write(tmp.path().join("pkg").join("b.py"), "").unwrap();
        fs::write(tmp.path().join("pkg").join("a.py"), "").unwrap();
        fs::write(tmp.path().join("pkg").join("sub").join("c.py"), "").unwrap();

        let files = walk_files(&tmp.path().join("pkg"), &patterns(&["sub"]).unwrap()).unwrap();
        assert_eq!(files, vec![PathBuf::from("a.py"), PathBuf::from("b.py")]);
    }
}
