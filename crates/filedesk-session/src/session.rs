// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// FileSession — selected file and operation state machine.
//
// Two error tiers:
//   - validation errors (bad extension, wrong type for the action, no crop
//     box) are returned synchronously from `select_file` / `begin_*` and never
//     touch the operation state;
//   - remote errors arrive through `complete` and become `Failed(kind)` with
//     one generic reason per kind.
//
// A `begin_*` call while an operation is Running is a silent no-op (`Ok(None)`).
//
// Stale completions: an operation is tied to the selection id it started
// with. If the user picked another file in the meantime, the Running state
// still completes, but the artifact is dropped rather than offered for the
// new file.

use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use filedesk_core::error::{FiledeskError, Result};
use filedesk_core::human_errors::{
    delivered_message, failure_message, humanize_error, progress_message, ready_message,
};
use filedesk_core::types::{
    ConvertDirection, DisplayedRect, FileHandle, ImageSize, Notice, OperationKind,
    TransformResult,
};
use filedesk_document::CropGeometryResolver;
use filedesk_document::naming::{compressed_name, converted_name};
use filedesk_remote::TransformService;

use crate::operation::{
    Completion, OperationOutcome, OperationRequest, OperationTicket, PendingOperation,
};
use crate::selection::FileSelection;
use crate::state::OperationState;

/// Single source of truth for the workflow. Mutated only through its methods.
#[derive(Debug, Default)]
pub struct FileSession {
    selection: Option<FileSelection>,
    state: OperationState,
    crop_region: Option<DisplayedRect>,
    result: Option<TransformResult>,
    notice: Option<Notice>,
}

impl FileSession {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Accessors ------------------------------------------------------------

    pub fn selection(&self) -> Option<&FileSelection> {
        self.selection.as_ref()
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn crop_region(&self) -> Option<DisplayedRect> {
        self.crop_region
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The artifact waiting for delivery, if any.
    pub fn result(&self) -> Option<&TransformResult> {
        self.result.as_ref()
    }

    /// Compress is offered for every accepted file.
    pub fn can_compress(&self) -> bool {
        self.selection.is_some() && !self.is_running()
    }

    /// The conversion offered for the current file, if any.
    pub fn convert_direction(&self) -> Option<ConvertDirection> {
        self.selection
            .as_ref()
            .and_then(|s| s.extension.convert_direction())
    }

    /// Crop is enabled for images once a non-degenerate box has been drawn.
    pub fn can_crop(&self) -> bool {
        !self.is_running()
            && self.selection.as_ref().is_some_and(|s| s.is_image)
            && self.crop_region.is_some()
    }

    // -- Selection ------------------------------------------------------------

    /// Validate and adopt `file`.
    ///
    /// On success the selection is replaced, and the crop box, the pending
    /// artifact and the notice are cleared. The operation state returns to
    /// Idle unless an operation is still in flight, in which case it stays
    /// Running until that operation completes.
    ///
    /// On failure the previous selection is kept and a validation notice is set.
    pub fn select_file(&mut self, file: FileHandle) -> Result<&FileSelection> {
        let Some(selection) = FileSelection::accept(file.clone()) else {
            let err = FiledeskError::UnsupportedExtension(file.name);
            return Err(self.reject(err));
        };

        info!(
            file = %selection.file.name,
            extension = %selection.extension,
            image = selection.is_image,
            id = %selection.id,
            "file selected"
        );

        if !self.state.is_running() {
            self.state = OperationState::Idle;
        }
        self.crop_region = None;
        self.result = None;
        self.notice = None;

        let selection = self.selection.insert(selection);
        Ok(&*selection)
    }

    /// Record the crop box drawn on the preview. Degenerate boxes, and boxes
    /// drawn when no image is selected, are ignored; returns whether the box
    /// was kept.
    pub fn set_crop_region(&mut self, region: DisplayedRect) -> bool {
        let is_image = self.selection.as_ref().is_some_and(|s| s.is_image);
        if !is_image || region.is_degenerate() {
            return false;
        }
        self.crop_region = Some(region);
        true
    }

    /// Forget the drawn box, e.g. after the preview was resized.
    pub fn clear_crop_region(&mut self) {
        self.crop_region = None;
    }

    // -- Starting operations ---------------------------------------------------

    /// Start a compression of the current file.
    pub fn begin_compress(&mut self) -> Result<Option<PendingOperation>> {
        if self.ignore_while_running(OperationKind::Compress) {
            return Ok(None);
        }
        let selection = self.require_selection()?;
        let request = OperationRequest::Compress {
            output_name: compressed_name(selection.name()),
        };
        Ok(Some(self.start(selection, request)))
    }

    /// Start a PDF↔DOCX conversion of the current file.
    pub fn begin_convert(&mut self) -> Result<Option<PendingOperation>> {
        if self.ignore_while_running(OperationKind::Convert) {
            return Ok(None);
        }
        let selection = self.require_selection()?;
        let Some(direction) = selection.extension.convert_direction() else {
            let err = FiledeskError::ConversionUnavailable(selection.extension.to_string());
            return Err(self.reject(err));
        };
        let request = OperationRequest::Convert {
            direction,
            output_name: converted_name(selection.name(), direction),
        };
        Ok(Some(self.start(selection, request)))
    }

    /// Start a crop of the current image.
    ///
    /// `region` is in displayed pixels of a preview shown at `displayed`;
    /// `natural` is the image's own size. The region is mapped to natural
    /// pixels before anything is sent.
    pub fn begin_crop(
        &mut self,
        region: DisplayedRect,
        displayed: ImageSize,
        natural: ImageSize,
    ) -> Result<Option<PendingOperation>> {
        if self.ignore_while_running(OperationKind::Crop) {
            return Ok(None);
        }
        let selection = self.require_selection()?;
        if !selection.is_image {
            let err = FiledeskError::NotAnImage(selection.extension.to_string());
            return Err(self.reject(err));
        }
        if region.is_degenerate() {
            return Err(self.reject(FiledeskError::DegenerateCropRegion));
        }
        let natural_region = match CropGeometryResolver::resolve(&region, displayed, natural) {
            Ok(rect) => rect,
            Err(e) => return Err(self.reject(e.into())),
        };
        let request = OperationRequest::Crop {
            region: natural_region,
        };
        Ok(Some(self.start(selection, request)))
    }

    /// Start a crop using the box last recorded with `set_crop_region`.
    pub fn begin_crop_drawn(
        &mut self,
        displayed: ImageSize,
        natural: ImageSize,
    ) -> Result<Option<PendingOperation>> {
        if self.ignore_while_running(OperationKind::Crop) {
            return Ok(None);
        }
        match self.crop_region {
            Some(region) => self.begin_crop(region, displayed, natural),
            None => Err(self.reject(FiledeskError::MissingCropRegion)),
        }
    }

    // -- Finishing operations --------------------------------------------------

    /// Apply the outcome of an executed operation.
    ///
    /// Always moves Running → Succeeded/Failed. The artifact is kept for
    /// delivery only if the selection is still the one the operation was
    /// started for.
    pub fn complete(&mut self, outcome: OperationOutcome) -> Completion {
        let OperationOutcome { ticket, result } = outcome;
        let OperationTicket { kind, selection, .. } = ticket;

        if self.state != OperationState::Running(kind) {
            warn!(%kind, state = ?self.state, "completion arrived for an operation that is not running");
        }

        let stale = self.selection.as_ref().map(|s| s.id) != Some(selection);

        match result {
            Ok(artifact) => {
                self.state = OperationState::Succeeded {
                    kind,
                    suggested_name: artifact.suggested_name().to_string(),
                };
                if stale {
                    info!(%kind, selection = %selection, "selection changed in flight, discarding result");
                } else {
                    info!(%kind, name = artifact.suggested_name(), "operation succeeded");
                    self.result = Some(artifact);
                    self.notice = Some(Notice::success(ready_message(kind)));
                }
                Completion {
                    kind,
                    succeeded: true,
                    stale,
                }
            }
            Err(err) => {
                error!(%kind, error = %err, stale, "operation failed");
                let reason = failure_message(kind).to_string();
                self.state = OperationState::Failed {
                    kind,
                    reason: reason.clone(),
                };
                self.result = None;
                if !stale {
                    self.notice = Some(Notice::error(reason));
                }
                Completion {
                    kind,
                    succeeded: false,
                    stale,
                }
            }
        }
    }

    /// Hand the pending artifact to delivery. The session keeps no copy.
    pub fn take_result(&mut self) -> Option<TransformResult> {
        self.result.take()
    }

    /// Update the notice after the artifact was (or wasn't) delivered.
    pub fn record_delivery(&mut self, kind: OperationKind, outcome: &Result<PathBuf>) {
        self.notice = Some(match outcome {
            Ok(path) => {
                info!(%kind, path = %path.display(), "artifact delivered");
                Notice::success(delivered_message(kind))
            }
            Err(e) => {
                warn!(%kind, error = %e, "artifact delivery failed");
                Notice::error(humanize_error(e).message)
            }
        });
    }

    // -- Convenience: begin, execute and complete in one call ------------------

    pub async fn run_compress(
        &mut self,
        service: &dyn TransformService,
    ) -> Result<Option<Completion>> {
        let Some(pending) = self.begin_compress()? else {
            return Ok(None);
        };
        Ok(Some(self.complete(pending.execute(service).await)))
    }

    pub async fn run_convert(
        &mut self,
        service: &dyn TransformService,
    ) -> Result<Option<Completion>> {
        let Some(pending) = self.begin_convert()? else {
            return Ok(None);
        };
        Ok(Some(self.complete(pending.execute(service).await)))
    }

    pub async fn run_crop(
        &mut self,
        service: &dyn TransformService,
        region: DisplayedRect,
        displayed: ImageSize,
        natural: ImageSize,
    ) -> Result<Option<Completion>> {
        let Some(pending) = self.begin_crop(region, displayed, natural)? else {
            return Ok(None);
        };
        Ok(Some(self.complete(pending.execute(service).await)))
    }

    // -- Internals ---------------------------------------------------------------

    fn ignore_while_running(&self, requested: OperationKind) -> bool {
        if let OperationState::Running(current) = self.state {
            debug!(%requested, %current, "operation already running, ignoring");
            return true;
        }
        false
    }

    fn require_selection(&mut self) -> Result<FileSelection> {
        if let Some(selection) = &self.selection {
            return Ok(selection.clone());
        }
        Err(self.reject(FiledeskError::NoFileSelected))
    }

    /// Surface a validation error in the notice and hand it back.
    fn reject(&mut self, err: FiledeskError) -> FiledeskError {
        warn!(error = %err, "rejected");
        self.notice = Some(Notice::error(humanize_error(&err).message));
        err
    }

    fn start(&mut self, selection: FileSelection, request: OperationRequest) -> PendingOperation {
        let kind = request.kind();
        let ticket = OperationTicket {
            kind,
            selection: selection.id,
            started_at: chrono::Utc::now(),
        };

        self.state = OperationState::Running(kind);
        self.result = None;
        self.notice = Some(Notice::info(progress_message(kind)));
        info!(%kind, file = %selection.file.name, request = ?request, "operation started");

        PendingOperation {
            ticket,
            mime: selection.extension.mime_type(),
            source: selection.file,
            request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, MockService, fixture};
    use filedesk_core::types::{FileExtension, NaturalRect, NoticeTone};

    fn session_with(dir: &tempfile::TempDir, name: &str) -> FileSession {
        let mut session = FileSession::new();
        session.select_file(fixture(dir, name, b"payload")).unwrap();
        session
    }

    // -- select_file ----------------------------------------------------------

    #[test]
    fn unsupported_extension_keeps_previous_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_with(&dir, "notes.txt");
        let before = session.selection().cloned();

        for name in ["setup.exe", "movie.mp4", "noext", "archive.tar.gz"] {
            let err = session
                .select_file(fixture(&dir, name, b"x"))
                .unwrap_err();
            assert!(matches!(err, FiledeskError::UnsupportedExtension(_)));
            assert_eq!(session.selection().cloned(), before);
            let notice = session.notice().unwrap();
            assert_eq!(notice.tone, NoticeTone::Error);
            assert_eq!(notice.text, "Unsupported file type.");
        }
        assert_eq!(session.state(), &OperationState::Idle);
    }

    #[test]
    fn image_flag_follows_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = FileSession::new();
        for ext in FileExtension::ALL {
            let name = format!("file{}", ext.as_str().to_uppercase());
            let selection = session.select_file(fixture(&dir, &name, b"x")).unwrap();
            assert_eq!(selection.is_image, ext.is_image(), "{name}");
            assert_eq!(selection.preview.is_some(), ext.is_image(), "{name}");
        }
    }

    #[tokio::test]
    async fn new_selection_clears_result_crop_and_notice() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let mut session = session_with(&dir, "cat.png");
        assert!(session.set_crop_region(DisplayedRect::new(1.0, 1.0, 5.0, 5.0)));
        session.run_compress(&svc).await.unwrap();
        assert!(session.result().is_some());

        session.select_file(fixture(&dir, "dog.jpg", b"woof")).unwrap();

        assert_eq!(session.state(), &OperationState::Idle);
        assert!(session.result().is_none());
        assert!(session.crop_region().is_none());
        assert!(session.notice().is_none());
    }

    // -- compress ---------------------------------------------------------------

    #[tokio::test]
    async fn compress_uploads_file_and_names_result() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let mut session = session_with(&dir, "notes.log");

        let completion = session.run_compress(&svc).await.unwrap().unwrap();

        assert!(completion.succeeded && !completion.stale);
        assert_eq!(
            svc.calls(),
            vec![Call::Compress {
                name: "notes.log".into(),
                bytes: b"payload".to_vec()
            }]
        );
        assert_eq!(
            session.state(),
            &OperationState::Succeeded {
                kind: OperationKind::Compress,
                suggested_name: "compressed-notes.log".into()
            }
        );
        assert_eq!(
            session.take_result(),
            Some(TransformResult::Blob {
                kind: OperationKind::Compress,
                bytes: b"compressed".to_vec(),
                suggested_name: "compressed-notes.log".into()
            })
        );
        assert!(session.take_result().is_none());
    }

    #[tokio::test]
    async fn compress_without_selection_is_local_error() {
        let svc = MockService::default();
        let mut session = FileSession::new();
        let err = session.run_compress(&svc).await.unwrap_err();
        assert!(matches!(err, FiledeskError::NoFileSelected));
        assert!(svc.calls().is_empty());
        assert_eq!(session.state(), &OperationState::Idle);
    }

    #[tokio::test]
    async fn remote_failure_marks_failed_and_drops_prior_result() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let mut session = session_with(&dir, "data.json");
        session.run_compress(&svc).await.unwrap();
        assert!(session.result().is_some());

        svc.set_failing(true);
        let completion = session.run_compress(&svc).await.unwrap().unwrap();

        assert!(!completion.succeeded);
        assert_eq!(
            session.state(),
            &OperationState::Failed {
                kind: OperationKind::Compress,
                reason: "Compression failed.".into()
            }
        );
        assert!(session.result().is_none());
        assert_eq!(session.notice().unwrap().text, "Compression failed.");
    }

    #[tokio::test]
    async fn vanished_source_file_fails_the_operation() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let mut session = session_with(&dir, "gone.txt");
        std::fs::remove_file(dir.path().join("gone.txt")).unwrap();

        session.run_compress(&svc).await.unwrap();

        assert!(matches!(session.state(), OperationState::Failed { .. }));
        assert!(svc.calls().is_empty());
    }

    // -- convert ----------------------------------------------------------------

    #[tokio::test]
    async fn pdf_converts_to_docx() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let mut session = session_with(&dir, "thesis.pdf");
        assert_eq!(session.convert_direction(), Some(ConvertDirection::PdfToDocx));

        session.run_convert(&svc).await.unwrap();

        assert_eq!(
            svc.calls(),
            vec![Call::Convert {
                direction: ConvertDirection::PdfToDocx,
                name: "thesis.pdf".into()
            }]
        );
        assert_eq!(
            session.take_result(),
            Some(TransformResult::Remote {
                download_url: "http://convert.test/convert/pdf-to-docx/out".into(),
                suggested_name: "thesis.docx".into()
            })
        );
    }

    #[tokio::test]
    async fn docx_converts_to_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let mut session = session_with(&dir, "cv.docx");

        session.run_convert(&svc).await.unwrap();

        assert_eq!(
            svc.calls(),
            vec![Call::Convert {
                direction: ConvertDirection::DocxToPdf,
                name: "cv.docx".into()
            }]
        );
        assert_eq!(session.result().unwrap().suggested_name(), "cv.pdf");
    }

    #[tokio::test]
    async fn convert_on_other_types_is_local_capability_error() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        for name in ["a.txt", "b.log", "c.json", "d.png", "e.doc", "f.webp"] {
            let mut session = session_with(&dir, name);
            let err = session.run_convert(&svc).await.unwrap_err();
            assert!(matches!(err, FiledeskError::ConversionUnavailable(_)), "{name}");
            assert_eq!(session.state(), &OperationState::Idle);
            assert_eq!(
                session.notice().unwrap().text,
                "Conversion is only available for PDF and DOCX."
            );
        }
        assert!(svc.calls().is_empty());
    }

    // -- crop -------------------------------------------------------------------

    #[tokio::test]
    async fn crop_sends_natural_pixel_region() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let mut session = session_with(&dir, "cat.png");

        session
            .run_crop(
                &svc,
                DisplayedRect::new(10.0, 10.0, 20.0, 20.0),
                ImageSize::new(100, 100),
                ImageSize::new(400, 200),
            )
            .await
            .unwrap();

        assert_eq!(
            svc.calls(),
            vec![Call::Crop {
                name: "cat.png".into(),
                region: NaturalRect::new(40, 20, 80, 40)
            }]
        );
        assert_eq!(session.result().unwrap().suggested_name(), "cropped-image.png");
    }

    #[tokio::test]
    async fn crop_validation_never_changes_state() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let region = DisplayedRect::new(10.0, 10.0, 20.0, 20.0);
        let size = ImageSize::new(100, 100);

        let mut doc = session_with(&dir, "paper.pdf");
        let err = doc.run_crop(&svc, region, size, size).await.unwrap_err();
        assert!(matches!(err, FiledeskError::NotAnImage(_)));
        assert_eq!(doc.state(), &OperationState::Idle);

        let mut img = session_with(&dir, "cat.jpeg");
        let flat = DisplayedRect::new(10.0, 10.0, 20.0, 0.0);
        let err = img.run_crop(&svc, flat, size, size).await.unwrap_err();
        assert!(matches!(err, FiledeskError::DegenerateCropRegion));

        let err = img
            .run_crop(&svc, region, ImageSize::new(0, 100), size)
            .await
            .unwrap_err();
        assert!(matches!(err, FiledeskError::Geometry(_)));
        assert_eq!(img.state(), &OperationState::Idle);
        assert_eq!(img.notice().unwrap().text, "Please crop a valid area.");

        assert!(svc.calls().is_empty());
    }

    #[test]
    fn drawn_crop_box_enables_crop() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_with(&dir, "cat.webp");
        assert!(!session.can_crop());
        assert!(matches!(
            session.begin_crop_drawn(ImageSize::new(10, 10), ImageSize::new(10, 10)),
            Err(FiledeskError::MissingCropRegion)
        ));

        assert!(!session.set_crop_region(DisplayedRect::new(3.0, 3.0, 0.0, 4.0)));
        assert!(session.set_crop_region(DisplayedRect::new(3.0, 3.0, 4.0, 4.0)));
        assert!(session.can_crop());

        let pending = session
            .begin_crop_drawn(ImageSize::new(10, 10), ImageSize::new(20, 20))
            .unwrap()
            .unwrap();
        assert_eq!(
            pending.request(),
            &OperationRequest::Crop {
                region: NaturalRect::new(6, 6, 8, 8)
            }
        );
    }

    #[test]
    fn crop_box_is_ignored_for_documents() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_with(&dir, "paper.pdf");
        assert!(!session.set_crop_region(DisplayedRect::new(0.0, 0.0, 5.0, 5.0)));
        assert!(session.crop_region().is_none());
    }

    // -- concurrency ------------------------------------------------------------

    #[tokio::test]
    async fn second_operation_while_running_is_a_silent_noop() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let mut session = session_with(&dir, "photo.png");
        session.set_crop_region(DisplayedRect::new(0.0, 0.0, 5.0, 5.0));

        let pending = session.begin_compress().unwrap().unwrap();
        assert_eq!(session.state(), &OperationState::Running(OperationKind::Compress));
        assert_eq!(session.notice().unwrap().text, "Compressing file...");
        assert!(!session.can_compress());
        assert!(!session.can_crop());

        assert!(session.begin_compress().unwrap().is_none());
        assert!(session.begin_convert().unwrap().is_none());
        assert!(
            session
                .begin_crop(
                    DisplayedRect::new(0.0, 0.0, 5.0, 5.0),
                    ImageSize::new(10, 10),
                    ImageSize::new(10, 10)
                )
                .unwrap()
                .is_none()
        );
        assert_eq!(session.state(), &OperationState::Running(OperationKind::Compress));
        assert_eq!(session.notice().unwrap().text, "Compressing file...");

        let completion = session.complete(pending.execute(&svc).await);
        assert!(completion.succeeded);
        assert_eq!(svc.calls().len(), 1);
    }

    #[tokio::test]
    async fn stale_success_completes_but_is_not_offered() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::default();
        let mut session = session_with(&dir, "first.txt");

        let pending = session.begin_compress().unwrap().unwrap();
        session.select_file(fixture(&dir, "second.txt", b"2")).unwrap();
        assert!(session.is_running());

        let completion = session.complete(pending.execute(&svc).await);

        assert!(completion.stale && completion.succeeded);
        assert_eq!(
            session.state(),
            &OperationState::Succeeded {
                kind: OperationKind::Compress,
                suggested_name: "compressed-first.txt".into()
            }
        );
        assert!(session.take_result().is_none());
        assert_eq!(session.selection().unwrap().name(), "second.txt");
        // The upload used the file captured at start.
        assert_eq!(
            svc.calls(),
            vec![Call::Compress {
                name: "first.txt".into(),
                bytes: b"payload".to_vec()
            }]
        );
    }

    #[tokio::test]
    async fn stale_failure_leaves_notice_alone() {
        let dir = tempfile::tempdir().unwrap();
        let svc = MockService::failing();
        let mut session = session_with(&dir, "first.pdf");

        let pending = session.begin_convert().unwrap().unwrap();
        session.select_file(fixture(&dir, "second.pdf", b"2")).unwrap();
        let completion = session.complete(pending.execute(&svc).await);

        assert!(completion.stale && !completion.succeeded);
        assert!(matches!(session.state(), OperationState::Failed { .. }));
        assert!(session.notice().is_none());
    }

    #[test]
    fn delivery_outcome_updates_notice() {
        let mut session = FileSession::new();
        session.record_delivery(OperationKind::Crop, &Ok(PathBuf::from("/tmp/cropped-image.png")));
        assert_eq!(session.notice().unwrap().text, "Image cropped and downloaded.");

        session.record_delivery(OperationKind::Crop, &Err(FiledeskError::DeliveryCancelled));
        let notice = session.notice().unwrap();
        assert_eq!(notice.tone, NoticeTone::Error);
        assert_eq!(notice.text, "Save cancelled.");
    }
}
