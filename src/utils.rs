use anyhow::Result;
use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};
use url::Url;

use crate::error::M3uError;

/// Whether `s` is already an absolute URI (`http://...`, `file:///...`).
/// Single-letter schemes are Windows drive letters, not URIs.
pub fn is_uri(s: &str) -> bool {
    Url::parse(s).is_ok_and(|url| url.scheme().len() > 1)
}

/// Lexically removes `.` and resolves `..` components, never touching the disk.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in dunce::simplified(path).components() {
        match component {
            Component::CurDir => (),
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => (),
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Turns an absolute filesystem path into a `file://` URI.
pub fn path_to_uri(path: &Path) -> Result<String> {
    let path = normalize_path(path);
    let url = Url::from_file_path(&path).map_err(|_| {
        M3uError::Path(format!(
            "`{}` can't be expressed as a file URI",
            path.to_string_lossy()
        ))
    })?;

    Ok(url.to_string())
}

/// Inverse of `path_to_uri`, `None` if `uri` doesn't point to a local file.
pub fn uri_to_path(uri: &str) -> Option<PathBuf> {
    let url = Url::parse(uri).ok()?;
    if url.scheme() != "file" {
        return None;
    }

    url.to_file_path().ok()
}

/// Percent-decoded stem of the last path segment of `uri`,
/// e.g. `foo bar` for `http://example.com/foo%20bar.mp3`.
pub fn stem_from_uri(uri: &str) -> Option<String> {
    let url = Url::parse(uri).ok()?;
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).next_back()?;
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    let stem = Path::new(decoded.as_ref()).file_stem()?;

    Some(stem.to_string_lossy().into_owned())
}
