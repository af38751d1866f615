//! Structural "last segment" extraction
//!
//! A segment is derived from the textual representation of a path alone. Nothing here
//! touches the filesystem: a path that does not exist, a dangling symlink and a symlink
//! to a directory all report their own final name.
use std::{borrow::Cow, path::Path};

/// Extracts the final segment (the "file name") of a path without performing I/O.
///
/// Returns `None` when the path has no final segment, for example the root.
pub trait LastSegment {
    type Path: ?Sized;

    fn last_segment<'a>(&self, path: &'a Self::Path) -> Option<Cow<'a, str>>;

    /// How `path` is shown in failure messages
    fn display(&self, path: &Self::Path) -> String;
}

/// Host platform paths, decomposed with [`Path::file_name`]
///
/// Trailing separators and `.` components are ignored. Names that are not valid
/// UTF-8 are converted lossily.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeSegments;

impl LastSegment for NativeSegments {
    type Path = Path;

    fn last_segment<'a>(&self, path: &'a Path) -> Option<Cow<'a, str>> {
        path.file_name().map(|name| name.to_string_lossy())
    }

    fn display(&self, path: &Path) -> String {
        path.display().to_string()
    }
}

/// `/` separated paths held as text, independent of the host platform
///
/// Useful for virtual namespaces (in-memory filesystems, archive entries, URL paths)
/// where `\` must not be treated as a separator. Unlike [`NativeSegments`] nothing is
/// normalized besides trailing `/`: a final `.` or `..` is the segment itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlashSegments;

impl LastSegment for SlashSegments {
    type Path = str;

    fn last_segment<'a>(&self, path: &'a str) -> Option<Cow<'a, str>> {
        let trimmed = path.trim_end_matches('/');
        let name = match trimmed.rsplit_once('/') {
            Some((_, right)) => right,
            None => trimmed,
        };

        if name.is_empty() {
            None
        } else {
            Some(Cow::Borrowed(name))
        }
    }

    fn display(&self, path: &str) -> String {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    fn native(path: &str) -> Option<String> {
        NativeSegments
            .last_segment(Path::new(path))
            .map(Cow::into_owned)
    }

    fn slash(path: &str) -> Option<String> {
        SlashSegments.last_segment(path).map(Cow::into_owned)
    }

    #[test]
    fn test_native_last_segment() {
        assert_eq!(native("/dir1/dir2/gc.log"), Some("gc.log".to_string()));
        assert_eq!(native("/dir1/dir2"), Some("dir2".to_string()));
        assert_eq!(native("/dir1/dir2/"), Some("dir2".to_string()));
        assert_eq!(native("/dir1/dir2/."), Some("dir2".to_string()));
        assert_eq!(native("relative.txt"), Some("relative.txt".to_string()));
        assert_eq!(native("/"), None);
        assert_eq!(native(""), None);
        assert_eq!(native("/dir1/.."), None);
    }

    #[test]
    fn test_slash_last_segment() {
        assert_eq!(slash("/dir1/bad-symlink"), Some("bad-symlink".to_string()));
        assert_eq!(slash("/dir1/dir2//"), Some("dir2".to_string()));
        assert_eq!(slash("gc.log"), Some("gc.log".to_string()));
        assert_eq!(slash(r"C:\logs\gc.log"), Some(r"C:\logs\gc.log".to_string()));
        assert_eq!(slash("/"), None);
        assert_eq!(slash(""), None);
        assert_eq!(slash("/dir1/dir2/."), Some(".".to_string()));
        assert_eq!(slash("/dir1/.."), Some("..".to_string()));
        assert_eq!(slash(".."), Some("..".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(NativeSegments.display(Path::new("/dir1/gc.log")), "/dir1/gc.log");
        assert_eq!(SlashSegments.display("/dir1/gc.log"), "/dir1/gc.log");
    }

    #[cfg(unix)]
    #[test]
    fn test_native_non_utf8_is_lossy() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let path = Path::new(OsStr::from_bytes(b"/dir1/gc\xFF.log"));
        assert_eq!(
            NativeSegments.last_segment(path).map(Cow::into_owned),
            Some("gc\u{FFFD}.log".to_string())
        );
    }
}
