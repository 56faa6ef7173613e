//! File name filtering for collected paths.

use std::path::{Path, PathBuf};

use pydeps_core::errors::ScanError;

/// Convert a path string to forward-slash separators.
pub fn to_posix(path: &str) -> String {
    path.replace('\\', "/")
}

fn path_as_text(file: &Path) -> Result<&str, ScanError> {
    file.to_str().ok_or_else(|| ScanError::TypeMismatch {
        path: file.to_path_buf(),
        found: "non-UTF-8 path".to_string(),
    })
}

/// Whether `file` ends with `extension` (plain suffix match, so `".py"` and
/// `"py"` both work).
///
/// Blank file names or extensions are rejected rather than silently matching.
pub fn keep_file_by_extension(file: &Path, extension: &str) -> Result<bool, ScanError> {
    let text = path_as_text(file)?;
    if text.trim().is_empty() || extension.trim().is_empty() {
        return Err(ScanError::InvalidArgument {
            message: "file and extension cannot be empty strings".to_string(),
        });
    }
    Ok(text.ends_with(extension))
}

/// Whether the file name (last path component) survives the prefix/suffix
/// exclusions.
pub fn keep_file_by_name(path: &Path, starts_with: Option<&str>, ends_with: Option<&str>) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return true,
    };
    if starts_with.is_some_and(|prefix| name.starts_with(prefix)) {
        return false;
    }
    if ends_with.is_some_and(|suffix| name.ends_with(suffix)) {
        return false;
    }
    true
}

/// Apply the extension and name filters to one path. Returns the POSIX form
/// when kept.
pub(crate) fn accept(
    path: &Path,
    extension: Option<&str>,
    starts_with: Option<&str>,
    ends_with: Option<&str>,
) -> Result<Option<String>, ScanError> {
    if let Some(ext) = extension {
        if !keep_file_by_extension(path, ext)? {
            return Ok(None);
        }
    }
    if !keep_file_by_name(path, starts_with, ends_with) {
        return Ok(None);
    }
    Ok(Some(to_posix(path_as_text(path)?)))
}

/// Filter a list of paths. Order is preserved; the first non-text path aborts.
pub fn filter_files(
    files: &[PathBuf],
    extension: Option<&str>,
    starts_with: Option<&str>,
    ends_with: Option<&str>,
) -> Result<Vec<String>, ScanError> {
    let mut kept = Vec::new();
    for file in files {
        if let Some(posix) = accept(file, extension, starts_with, ends_with)? {
            kept.push(posix);
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_keep_file_by_extension() {
        assert!(keep_file_by_extension(Path::new("file1.txt"), ".txt").unwrap());
        assert!(!keep_file_by_extension(Path::new("file1.txt"), ".py").unwrap());
        assert!(!keep_file_by_extension(Path::new("file1.txt"), ".c").unwrap());
    }

    #[test]
    fn test_blank_extension_rejected() {
        for ext in ["", " ", "   "] {
            let result = keep_file_by_extension(Path::new("file1.txt"), ext);
            assert!(matches!(result, Err(ScanError::InvalidArgument { .. })));
        }
    }

    #[test]
    fn test_blank_file_rejected() {
        let result = keep_file_by_extension(Path::new(" "), ".py");
        assert!(matches!(result, Err(ScanError::InvalidArgument { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_is_type_mismatch() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"bad\xffname.py"));
        let result = keep_file_by_extension(path, ".py");
        assert!(matches!(result, Err(ScanError::TypeMismatch { .. })));
    }

    #[test]
    fn test_exclude_by_prefix_and_suffix() {
        let files = paths(&["data/file1.txt", "data/__init__.py"]);
        assert_eq!(
            filter_files(&files, None, Some("__"), None).unwrap(),
            vec!["data/file1.txt"]
        );
        assert_eq!(
            filter_files(&files, None, None, Some("__.py")).unwrap(),
            vec!["data/file1.txt"]
        );
    }

    #[test]
    fn test_filter_files_combinations() {
        let files = paths(&["file1.txt", "dummy.py", "styles.css"]);
        assert_eq!(filter_files(&files, Some(".txt"), None, None).unwrap(), vec!["file1.txt"]);
        assert_eq!(
            filter_files(&files, None, Some("dummy"), None).unwrap(),
            vec!["file1.txt", "styles.css"]
        );
        assert_eq!(
            filter_files(&files, None, None, Some(".css")).unwrap(),
            vec!["file1.txt", "dummy.py"]
        );
        assert!(filter_files(&files, Some(".py"), Some("dummy"), Some(".css"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_prefix_matches_file_name_not_directory() {
        let files = paths(&["__pkg__/module.py"]);
        assert_eq!(
            filter_files(&files, Some(".py"), Some("__"), None).unwrap(),
            vec!["__pkg__/module.py"]
        );
    }

    #[test]
    fn test_to_posix() {
        assert_eq!(to_posix("C:\\path\\to\\file"), "C:/path/to/file");
        assert_eq!(to_posix("already/posix.py"), "already/posix.py");
    }
}
