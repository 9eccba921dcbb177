//! Path utilities for resolving configured directories.
//!
//! All resolution is lexical. Nothing here touches the filesystem, so a
//! path that does not exist yet resolves the same as one that does.

use crate::error::{FuelcfgError, FuelcfgResult};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Normalize a path by resolving `.` and `..` components.
///
/// Leading `..` components of a relative path are kept. Returns `None` when
/// `..` would climb above the root of an absolute path.
pub fn normalize_path(path: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut components: Vec<Utf8Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Utf8Component::CurDir => {},
            Utf8Component::ParentDir => match components.last() {
                Some(Utf8Component::Normal(_)) => {
                    components.pop();
                },
                Some(Utf8Component::RootDir) | Some(Utf8Component::Prefix(_)) => return None,
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    if components.is_empty() {
        return Some(Utf8PathBuf::from("."));
    }

    Some(components.iter().map(|c| c.as_str()).collect())
}

/// Directory containing the config file, used as the base for relative paths
pub fn base_dir_of(config_file: &Utf8Path) -> Utf8PathBuf {
    let parent = match config_file.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        Some(_) => Utf8Path::new("."),
        None if config_file.is_absolute() => config_file,
        None => Utf8Path::new("."),
    };

    normalize_path(parent).unwrap_or_else(|| parent.to_path_buf())
}

/// Resolve a configured path against `base`.
///
/// Absolute paths are only normalized. `field` names the config entry in
/// the error if resolution fails.
pub fn resolve_path(field: &str, base: &Utf8Path, raw: &str) -> FuelcfgResult<Utf8PathBuf> {
    let fail = |reason: &str| FuelcfgError::PathResolution {
        field: field.to_string(),
        path: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.trim().is_empty() {
        return Err(fail("path is empty"));
    }
    if raw.contains('\0') {
        return Err(fail("path contains a NUL byte"));
    }

    let raw_path = Utf8Path::new(raw);
    let joined = if raw_path.is_absolute() {
        raw_path.to_path_buf()
    } else {
        base.join(raw_path)
    };

    normalize_path(&joined).ok_or_else(|| fail("'..' climbs above the filesystem root"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_path() {
        let path = Utf8Path::new("./src/../lib/./file.rs");
        assert_eq!(normalize_path(path).unwrap(), Utf8Path::new("lib/file.rs"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_dirs() {
        let path = Utf8Path::new("../../contract");
        assert_eq!(normalize_path(path).unwrap(), Utf8Path::new("../../contract"));
    }

    #[test]
    fn test_normalize_rejects_escape_from_root() {
        assert!(normalize_path(Utf8Path::new("/proj/../../etc")).is_none());
        assert_eq!(normalize_path(Utf8Path::new("/proj/../etc")).unwrap(), "/etc");
    }

    #[test]
    fn test_normalize_current_dir_only() {
        assert_eq!(normalize_path(Utf8Path::new("./.")).unwrap(), ".");
    }

    #[test]
    fn test_base_dir_of() {
        assert_eq!(base_dir_of(Utf8Path::new("/proj/frontend/fuels.config")), "/proj/frontend");
        assert_eq!(base_dir_of(Utf8Path::new("fuels.config.toml")), ".");
        assert_eq!(base_dir_of(Utf8Path::new("./app/fuels.config.toml")), "app");
    }

    #[test]
    fn test_resolve_relative_against_base() {
        let base = Utf8Path::new("/proj/frontend");
        assert_eq!(resolve_path("contracts", base, "../contract").unwrap(), "/proj/contract");
        assert_eq!(
            resolve_path("output", base, "./src/contracts").unwrap(),
            "/proj/frontend/src/contracts"
        );
    }

    #[test]
    fn test_resolve_absolute_ignores_base() {
        let base = Utf8Path::new("/proj/frontend");
        assert_eq!(resolve_path("contracts", base, "/opt/./sway/x").unwrap(), "/opt/sway/x");
    }

    #[test]
    fn test_resolve_errors() {
        let base = Utf8Path::new("/proj");

        for raw in ["", "   ", "a\0b", "../../.."] {
            let err = resolve_path("contracts[0]", base, raw).unwrap_err();
            match err {
                FuelcfgError::PathResolution { field, path, .. } => {
                    assert_eq!(field, "contracts[0]");
                    assert_eq!(path, raw);
                },
                other => panic!("unexpected error for {raw:?}: {other:?}"),
            }
        }
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(segments in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 0..8)) {
            let raw = format!("/root/{}", segments.join("/"));
            if let Some(once) = normalize_path(Utf8Path::new(&raw)) {
                let twice = normalize_path(&once).unwrap();
                prop_assert_eq!(once, twice);
            }
        }
    }
}
