// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware directory resolution.

use std::path::PathBuf;

use filedesk_core::error::Result;

const APP_DIR: &str = "filedesk";

/// Return the application data directory (settings live here), creating it
/// if needed.
pub fn data_dir() -> Result<PathBuf> {
    let dir = resolve_data_dir(|key| std::env::var(key).ok());
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Where the save dialog opens when no download directory is configured.
pub fn downloads_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join("Downloads"))
        .filter(|dir| dir.is_dir())
}

/// `FILEDESK_DATA_DIR`, else `$XDG_DATA_HOME/filedesk`, else
/// `~/.local/share/filedesk`, else a temp directory.
fn resolve_data_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(dir) = lookup("FILEDESK_DATA_DIR").filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(xdg) = lookup("XDG_DATA_HOME").filter(|d| !d.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = lookup("HOME") {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    std::env::temp_dir().join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn explicit_override_wins() {
        let dir = resolve_data_dir(env(&[
            ("FILEDESK_DATA_DIR", "/srv/filedesk"),
            ("XDG_DATA_HOME", "/xdg"),
        ]));
        assert_eq!(dir, PathBuf::from("/srv/filedesk"));
    }

    #[test]
    fn xdg_then_home() {
        assert_eq!(
            resolve_data_dir(env(&[("XDG_DATA_HOME", "/xdg"), ("HOME", "/home/u")])),
            PathBuf::from("/xdg/filedesk")
        );
        assert_eq!(
            resolve_data_dir(env(&[("HOME", "/home/u")])),
            PathBuf::from("/home/u/.local/share/filedesk")
        );
    }

    #[test]
    fn nothing_set_falls_back_to_temp() {
        assert_eq!(
            resolve_data_dir(env(&[])),
            std::env::temp_dir().join("filedesk")
        );
    }
}
