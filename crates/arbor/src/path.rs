//! # Paths
//!
//! Every node is keyed by an absolute, slash-separated path. This module holds the
//! pure path arithmetic the store relies on. Nothing in here touches storage.
//!
//! ## Normal Form
//!
//! A normalized path:
//! - starts with `/`
//! - has no empty, `.` or `..` segments
//! - has no trailing slash, unless it is the root `/` itself
//!
//! ## Resolution
//!
//! [`resolve`] turns user input into a normalized absolute path:
//!
//! ```text
//! resolve("/a/b", "c")       -> "/a/b/c"
//! resolve("/a/b", "../c")    -> "/a/c"
//! resolve("/a/b", "/x/./y")  -> "/x/y"
//! resolve("/",    "..")      -> "/"        (clamped at root)
//! resolve("/a",   "b//c/")   -> "/a/b/c"
//! ```
//!
//! Resolution never fails. Garbage in degrades to a best-effort normalized path.

use crate::error::{ArborError, Result};

pub const ROOT: &str = "/";

/// Resolve `input` against `current_dir` into a normalized absolute path.
///
/// Absolute input ignores `current_dir`. `.` is skipped and `..` pops one segment,
/// popping past the root is a no-op.
pub fn resolve(current_dir: &str, input: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    if !input.starts_with('/') {
        push_segments(&mut segments, current_dir);
    }
    push_segments(&mut segments, input);

    if segments.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

fn push_segments<'a>(segments: &mut Vec<&'a str>, raw: &'a str) {
    for part in raw.split('/') {
        match part {
            "" | "." => continue,
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }
}

pub fn is_root(path: &str) -> bool {
    path == ROOT
}

/// Build the child path for `name` under `parent`.
///
/// The empty string (the root's parent sentinel) is treated like the root.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() || is_root(parent) {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Parent path of a normalized path. The root's parent is the empty string.
pub fn parent_of(path: &str) -> String {
    if is_root(path) {
        return String::new();
    }
    match path.rfind('/') {
        Some(0) | None => ROOT.to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}

/// Final segment of a normalized path. The root is named `/`.
pub fn name_of(path: &str) -> String {
    if is_root(path) {
        return ROOT.to_string();
    }
    match path.rfind('/') {
        Some(idx) => path[idx + 1..].to_string(),
        None => path.to_string(),
    }
}

/// True when `path` is `ancestor` itself or lies somewhere below it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    if is_root(ancestor) {
        return path.starts_with('/');
    }
    match path.strip_prefix(ancestor) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Replace the `old_prefix` of `path` with `new_prefix`.
///
/// Returns `None` when `path` is not within `old_prefix`.
pub fn rebase(path: &str, old_prefix: &str, new_prefix: &str) -> Option<String> {
    if !is_within(path, old_prefix) {
        return None;
    }
    let rest = if is_root(old_prefix) {
        path
    } else {
        &path[old_prefix.len()..]
    };
    if rest.is_empty() || rest == ROOT {
        return Some(new_prefix.to_string());
    }
    if is_root(new_prefix) {
        Some(rest.to_string())
    } else {
        Some(format!("{}{}", new_prefix, rest))
    }
}

/// Number of segments below the root. `/` has depth 0.
pub fn depth(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// Check that `name` can be used as a single path segment.
pub fn validate_name(parent: &str, name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name cannot be empty"
    } else if name.contains('/') {
        "name cannot contain '/'"
    } else if name == "." || name == ".." {
        "name cannot be '.' or '..'"
    } else {
        return Ok(());
    };
    Err(ArborError::invalid_target(join(parent, name), reason))
}
