//! Vault path helpers.
//!
//! Vault paths are `/`-separated and relative to the vault root, with no
//! leading or trailing separator. The root itself is spelled `/`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Path of the vault root folder.
pub const ROOT_PATH: &str = "/";

/// Characters left as-is inside a URI path segment. `:` stays so drive
/// letters survive in `file:///C:/...`.
const SAFE_PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b':');

/// Percent-encode one path segment for use in a URI.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SAFE_PATH_SEGMENT).to_string()
}

/// Percent-encode every segment of a `/`-separated path, keeping the
/// separators.
pub fn encode_uri_path(path: &str) -> String {
    path.split('/').map(encode_segment).collect::<Vec<_>>().join("/")
}

/// Normalize a user-supplied path into vault form.
///
/// Backslashes become `/`, repeated separators collapse, and leading and
/// trailing separators are stripped. An empty result means the root.
pub fn normalize_path(raw: &str) -> String {
    let joined = raw
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        ROOT_PATH.to_string()
    } else {
        joined
    }
}

/// Final component of a path.
pub fn file_name(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((_, name)) => name,
        None if path == ROOT_PATH => "",
        None => path,
    }
}

/// Path of the folder containing `path`. Top-level entries live in the root.
pub fn parent_path(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some(("", _)) | None => ROOT_PATH,
        Some((parent, _)) => parent,
    }
}

/// Text after the last `.` of a file name, case preserved.
///
/// Names without a dot, or whose only dot is the leading one, have no
/// extension.
pub fn extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => "",
    }
}

/// Join a child name onto a folder path.
pub fn join(folder: &str, name: &str) -> String {
    if folder == ROOT_PATH || folder.is_empty() {
        name.to_string()
    } else {
        format!("{folder}/{name}")
    }
}
