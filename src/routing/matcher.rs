//! Path cleaning for the fixed-path redirect.
//!
//! # Responsibilities
//! - Collapse repeated slashes
//! - Drop `.` segments and resolve `..` segments
//! - Keep a trailing slash when the input had one
//!
//! # Design Decisions
//! - Always returns a rooted path
//! - Borrows the input when it is already clean
//! - No percent-decoding: `/%2F` stays `/%2F`

use std::borrow::Cow;

/// Returns the canonical form of `path`.
pub fn clean_path(path: &str) -> Cow<'_, str> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut cleaned = String::with_capacity(path.len() + 1);
    for segment in &segments {
        cleaned.push('/');
        cleaned.push_str(segment);
    }
    if cleaned.is_empty() || path.ends_with('/') {
        cleaned.push('/');
    }

    if cleaned == path {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(cleaned)
    }
}
