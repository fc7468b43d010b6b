//! Directory scanning for batch analysis.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Error;

const DEFAULT_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Return `true` if `path` has a decodable image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            DEFAULT_EXTS.iter().any(|e| *e == ext)
        })
}

/// Lists supported images under `root`, sorted by path.
///
/// # Errors
/// Returns [`Error::BadDir`] if `root` is missing or not a directory.
pub fn scan_images(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, Error> {
    if !root.is_dir() {
        return Err(Error::BadDir(root.to_string_lossy().into_owned()));
    }

    let mut wd = WalkDir::new(root);
    if !recursive {
        wd = wd.max_depth(1);
    }

    let mut out: Vec<PathBuf> = wd
        .into_iter()
        // Skip hidden dot-directories *below* the root only.
        .filter_entry(|e| !should_skip_dir(e))
        .flatten()
        .filter(|entry| entry.file_type().is_file() && is_supported_image(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    out.sort();
    Ok(out)
}

fn should_skip_dir(entry: &DirEntry) -> bool {
    // Never skip the root; tempfile roots can be dot-dirs.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|n| n.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("face.JPG")));
        assert!(is_supported_image(Path::new("dir/face.webp")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn scan_skips_hidden_dirs_and_respects_depth() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::create_dir_all(root.join(".cache")).unwrap();
        fs::write(root.join("a.png"), b"x").unwrap();
        fs::write(root.join("nested").join("b.jpeg"), b"x").unwrap();
        fs::write(root.join(".cache").join("c.png"), b"x").unwrap();
        fs::write(root.join("d.txt"), b"x").unwrap();

        let all = scan_images(root, true).unwrap();
        let names: Vec<_> = all
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png".to_string(), "nested/b.jpeg".to_string()]);

        let shallow = scan_images(root, false).unwrap();
        assert_eq!(shallow, vec![root.join("a.png")]);
    }

    #[test]
    fn missing_root_is_bad_dir() {
        let tmp = tempdir().unwrap();
        let err = scan_images(&tmp.path().join("missing"), true).unwrap_err();
        assert!(matches!(err, Error::BadDir(_)));
    }
}
