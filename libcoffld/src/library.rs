//! Resolution of `-lNAME` references against the `-L` search path.
//!
//! Resolution is a pure filesystem existence check. We never open or inspect the candidate file;
//! whether it's actually a usable archive or import library is for the backend to decide.

use crate::error::Result;
use anyhow::bail;
use std::path::Path;
use std::path::PathBuf;

fn find_file(dir: &Path, filename: &str) -> Option<PathBuf> {
    let path = dir.join(filename);
    path.exists().then_some(path)
}

/// Resolves the value of a `-l` argument to a concrete path. `-l:foo` means the exact filename
/// `foo`; otherwise we look for `lib<name>.dll.a` (the import library, preferred for dynamic
/// linking) then `lib<name>.a`. Search-path order dominates the preference between the two forms:
/// the first directory containing either wins. With `static_only` set, import libraries are
/// skipped entirely.
pub(crate) fn search_library(
    name: &str,
    search_paths: &[PathBuf],
    static_only: bool,
) -> Result<PathBuf> {
    if let Some(filename) = name.strip_prefix(':') {
        for dir in search_paths {
            if let Some(path) = find_file(dir, filename) {
                return Ok(path);
            }
        }
        bail!("unable to find library -l{name}");
    }

    for dir in search_paths {
        if !static_only {
            if let Some(path) = find_file(dir, &format!("lib{name}.dll.a")) {
                return Ok(path);
            }
        }
        if let Some(path) = find_file(dir, &format!("lib{name}.a")) {
            return Ok(path);
        }
    }
    bail!("unable to find library -l{name}");
}

#[cfg(test)]
mod tests {
    use super::search_library;
    use std::path::Path;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch(dir: &Path, filename: &str) {
        std::fs::write(dir.join(filename), b"").unwrap();
    }

    fn two_dirs() -> (TempDir, TempDir, Vec<PathBuf>) {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        let paths = vec![dir_a.path().to_owned(), dir_b.path().to_owned()];
        (dir_a, dir_b, paths)
    }

    #[test]
    fn search_path_order_dominates() {
        let (dir_a, dir_b, paths) = two_dirs();
        touch(dir_b.path(), "libfoo.dll.a");
        let resolved = search_library("foo", &paths, false).unwrap();
        assert_eq!(resolved, dir_b.path().join("libfoo.dll.a"));

        // A static archive in an earlier directory beats an import library in a later one.
        touch(dir_a.path(), "libfoo.a");
        let resolved = search_library("foo", &paths, false).unwrap();
        assert_eq!(resolved, dir_a.path().join("libfoo.a"));
    }

    #[test]
    fn import_library_preferred_within_a_directory() {
        let (dir_a, _dir_b, paths) = two_dirs();
        touch(dir_a.path(), "libfoo.a");
        touch(dir_a.path(), "libfoo.dll.a");
        let resolved = search_library("foo", &paths, false).unwrap();
        assert_eq!(resolved, dir_a.path().join("libfoo.dll.a"));
    }

    #[test]
    fn static_only_skips_import_libraries() {
        let (dir_a, dir_b, paths) = two_dirs();
        touch(dir_a.path(), "libfoo.dll.a");
        touch(dir_b.path(), "libfoo.a");
        let resolved = search_library("foo", &paths, true).unwrap();
        assert_eq!(resolved, dir_b.path().join("libfoo.a"));

        // With only the import library present anywhere, static resolution fails.
        let err = search_library("bar", &paths, true).unwrap_err();
        assert_eq!(err.to_string(), "unable to find library -lbar");
        touch(dir_a.path(), "libbar.dll.a");
        assert!(search_library("bar", &paths, true).is_err());
    }

    #[test]
    fn exact_filename_reference() {
        let (dir_a, dir_b, paths) = two_dirs();
        touch(dir_b.path(), "exact.obj");
        let resolved = search_library(":exact.obj", &paths, false).unwrap();
        assert_eq!(resolved, dir_b.path().join("exact.obj"));

        // lib-prefixed files are irrelevant to an exact reference.
        touch(dir_a.path(), "libmissing.dll.a");
        touch(dir_a.path(), "libmissing.a");
        let err = search_library(":missing", &paths, false).unwrap_err();
        assert_eq!(err.to_string(), "unable to find library -l:missing");
    }

    #[test]
    fn not_found() {
        let (_dir_a, _dir_b, paths) = two_dirs();
        let err = search_library("nope", &paths, false).unwrap_err();
        assert_eq!(err.to_string(), "unable to find library -lnope");

        // No search paths at all.
        let err = search_library("nope", &[], false).unwrap_err();
        assert_eq!(err.to_string(), "unable to find library -lnope");
    }
}
