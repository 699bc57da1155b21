// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical path algebra.
//!
//! Pure string-level equivalents of `resolve`, `normalize` and `relative`.
//! Nothing here touches the filesystem: symlinks are not followed and paths
//! need not exist.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// `..` directly under a root is dropped (`/..` is `/`); leading `..` of a
/// relative path is kept. An empty result stays empty.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component)
            }
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
        }
    }
    out.iter().collect()
}

/// Resolve `path` against `base` and normalize. Absolute paths ignore `base`.
pub fn absolutize_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Resolve `path` against the current working directory and normalize.
///
/// If the working directory cannot be read the path is only normalized.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize(path);
    }
    let cwd = std::env::current_dir().unwrap_or_default();
    absolutize_from(&cwd, path)
}

/// Relative path leading from directory `from` to `to`.
///
/// Both inputs are absolutized first. Returns an empty path when they are
/// the same location. The result starts with `..` whenever `to` lies
/// outside `from`.
pub fn relative_to(from: &Path, to: &Path) -> PathBuf {
    let from = absolutize(from);
    let to = absolutize(to);
    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Different roots (e.g. two Windows drives) have no relative form.
    if common == 0 && (to.has_root() || matches!(to_parts.first(), Some(Component::Prefix(_)))) {
        return to;
    }

    let mut out = PathBuf::new();
    for _ in common..from_parts.len() {
        out.push("..");
    }
    for part in &to_parts[common..] {
        out.push(part.as_os_str());
    }
    out
}

/// Whether a relative path fails to name something strictly inside its base.
///
/// True for the empty path, for paths whose first component is `..`, and
/// for paths carrying a root or drive prefix.
pub fn escapes(relative: &Path) -> bool {
    match relative.components().next() {
        None => true,
        Some(Component::ParentDir) | Some(Component::RootDir) | Some(Component::Prefix(_)) => true,
        Some(Component::CurDir) | Some(Component::Normal(_)) => relative.is_absolute(),
    }
}

#[cfg(test)]
#[path = "lexical_tests.rs"]
mod tests;
