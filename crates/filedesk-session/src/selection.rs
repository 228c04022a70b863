// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The accepted file selection.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use filedesk_core::types::{FileExtension, FileHandle, SelectionId};

/// Where the view layer can load an image preview from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRef {
    pub path: PathBuf,
    pub mime: &'static str,
}

/// A file that passed extension validation.
///
/// Replaced wholesale on the next accepted pick; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub id: SelectionId,
    pub file: FileHandle,
    pub extension: FileExtension,
    pub is_image: bool,
    /// Present only for image extensions.
    pub preview: Option<PreviewRef>,
    pub selected_at: DateTime<Utc>,
}

impl FileSelection {
    /// Validate `file` against the allow-list. `None` if its extension is not accepted.
    pub fn accept(file: FileHandle) -> Option<Self> {
        let extension = FileExtension::from_file_name(&file.name)?;
        let is_image = extension.is_image();
        let preview = is_image.then(|| PreviewRef {
            path: file.path.clone(),
            mime: extension.mime_type(),
        });
        Some(Self {
            id: SelectionId::new(),
            file,
            extension,
            is_image,
            preview,
            selected_at: Utc::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.file.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_get_a_preview_reference() {
        let sel = FileSelection::accept(FileHandle::from_path("/pics/cat.WEBP")).unwrap();
        assert!(sel.is_image);
        assert_eq!(
            sel.preview,
            Some(PreviewRef {
                path: PathBuf::from("/pics/cat.WEBP"),
                mime: "image/webp"
            })
        );
    }

    #[test]
    fn documents_have_no_preview() {
        let sel = FileSelection::accept(FileHandle::from_path("/docs/a.pdf")).unwrap();
        assert!(!sel.is_image);
        assert!(sel.preview.is_none());
    }

    #[test]
    fn each_accept_mints_a_new_id() {
        let a = FileSelection::accept(FileHandle::from_path("a.txt")).unwrap();
        let b = FileSelection::accept(FileHandle::from_path("a.txt")).unwrap();
        assert_ne!(a.id, b.id);
    }
}
