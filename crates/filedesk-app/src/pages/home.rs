// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — pick a file, then compress, convert or crop it.
//
// Each action runs begin (session borrowed briefly) → execute (spawned, no
// borrow held) → complete. A fresh success is delivered straight away.

use std::path::PathBuf;

use dioxus::prelude::*;

use filedesk_core::types::{
    DisplayedRect, FileExtension, FileHandle, NoticeTone, OperationKind, TransformResult,
};
use filedesk_document::{CropDrag, ImagePreview};
use filedesk_session::{PendingOperation, deliver};

use crate::services::app_services::AppServices;
use crate::state::AppState;

const BUSY_LABEL: &str = "Processing...";

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut drag = use_signal(|| Option::<CropDrag>::None);
    let mut live_box = use_signal(|| Option::<DisplayedRect>::None);

    let app = state.read();
    let running = app.session.is_running();
    let selected = app.session.selection().map(|s| s.name().to_string());
    let is_image = app.session.selection().is_some_and(|s| s.is_image);
    let can_compress = app.session.can_compress();
    let can_crop = app.session.can_crop();
    let convert_label = app.session.convert_direction().map(|d| d.action_label());
    let notice = app.session.notice().cloned();
    let saved_box = app.session.crop_region();
    let square = app.config.lock_square_crop;
    let canvas = app.preview.clone().zip(app.displayed_size());
    let cropped = app.cropped_preview.clone();
    drop(app);

    let shown_box = live_box.read().or(saved_box);

    rsx! {
        div {
            h1 { "Filedesk" }
            p { style: "color: #666;", "Compress, convert and crop files" }

            // File selection
            section { style: "margin: 16px 0;",
                button {
                    style: "padding: 12px 24px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white; font-size: 16px;",
                    onclick: move |_| {
                        let suffixes: Vec<&str> = FileExtension::ALL.iter().map(|e| e.bare()).collect();
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Supported files", &suffixes[..])
                            .pick_file()
                        {
                            drag.set(None);
                            live_box.set(None);
                            select_path(state, path);
                        }
                    },
                    "Choose File"
                }
                if let Some(ref name) = selected {
                    p { "Selected: {name}" }
                }
            }

            // Actions
            if selected.is_some() {
                section { style: "display: flex; gap: 8px; flex-wrap: wrap; margin: 16px 0;",
                    button {
                        style: action_style(can_compress),
                        disabled: !can_compress,
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let begun = state.write().session.begin_compress();
                                if let Ok(Some(pending)) = begun {
                                    launch(svc.clone(), state, pending);
                                }
                            }
                        },
                        if running { "{BUSY_LABEL}" } else { "Compress" }
                    }
                    if let Some(label) = convert_label {
                        button {
                            style: action_style(!running),
                            disabled: running,
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    let begun = state.write().session.begin_convert();
                                    if let Ok(Some(pending)) = begun {
                                        launch(svc.clone(), state, pending);
                                    }
                                }
                            },
                            "{label}"
                        }
                    }
                    if is_image {
                        button {
                            style: action_style(can_crop),
                            disabled: !can_crop,
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    let sizes = {
                                        let app = state.read();
                                        app.preview.as_ref().map(|p| p.natural).zip(app.displayed_size())
                                    };
                                    let Some((natural, displayed)) = sizes else {
                                        return;
                                    };
                                    let begun = state.write().session.begin_crop_drawn(displayed, natural);
                                    if let Ok(Some(pending)) = begun {
                                        launch(svc.clone(), state, pending);
                                    }
                                }
                            },
                            "Crop"
                        }
                    }
                }
            }

            // Status notice
            if let Some(ref notice) = notice {
                p { style: notice_style(notice.tone),
                    "{notice.text}"
                }
            }

            // Image preview with crop overlay
            if let Some((preview, size)) = canvas {
                section { style: "margin: 16px 0;",
                    h3 { "Preview" }
                    p { style: "color: #888; font-size: 12px;", "Drag over the image to choose the crop area." }
                    div {
                        style: "position: relative; width: {size.width}px; height: {size.height}px; cursor: crosshair; user-select: none;",
                        onmousedown: move |evt| {
                            let at = evt.element_coordinates();
                            drag.set(Some(CropDrag::start(at.x, at.y, size, square)));
                            live_box.set(None);
                        },
                        onmousemove: move |evt| {
                            let current = *drag.read();
                            if let Some(d) = current {
                                let at = evt.element_coordinates();
                                live_box.set(Some(d.rect_to(at.x, at.y)));
                            }
                        },
                        onmouseup: move |evt| {
                            let at = evt.element_coordinates();
                            finish_drag(state, drag, live_box, at.x, at.y);
                        },
                        onmouseleave: move |evt| {
                            let at = evt.element_coordinates();
                            finish_drag(state, drag, live_box, at.x, at.y);
                        },
                        img {
                            src: "{preview.data_uri}",
                            width: "{size.width}",
                            height: "{size.height}",
                            draggable: "false",
                            style: "display: block; pointer-events: none;",
                        }
                        if let Some(b) = shown_box {
                            div {
                                style: "position: absolute; left: {b.x}px; top: {b.y}px; width: {b.width}px; height: {b.height}px; border: 2px dashed #007aff; background: rgba(0, 122, 255, 0.15); box-sizing: border-box; pointer-events: none;",
                            }
                        }
                    }
                }
            } else if is_image {
                p { style: "color: #888;", "This image could not be previewed." }
            }

            // Result of the last crop
            if let Some(cropped) = cropped {
                section { style: "margin: 16px 0;",
                    h3 { "Cropped Preview" }
                    img {
                        src: "{cropped.data_uri}",
                        style: "max-width: 100%; border: 1px solid #e0e0e0;",
                    }
                }
            }
        }
    }
}

/// Adopt a picked file and load its preview if it is an image.
fn select_path(mut state: Signal<AppState>, path: PathBuf) {
    let mut app = state.write();
    let preview_ref = match app.session.select_file(FileHandle::from_path(path)) {
        Ok(selection) => selection.preview.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "file rejected");
            return;
        }
    };

    app.cropped_preview = None;
    app.preview = preview_ref.and_then(|r| match ImagePreview::load(&r.path, r.mime) {
        Ok(preview) => Some(preview),
        Err(e) => {
            tracing::warn!(path = %r.path.display(), error = %e, "preview unavailable");
            None
        }
    });
}

/// End a drag and record the box if it has an area.
fn finish_drag(
    mut state: Signal<AppState>,
    mut drag: Signal<Option<CropDrag>>,
    mut live_box: Signal<Option<DisplayedRect>>,
    x: f64,
    y: f64,
) {
    let current = *drag.read();
    let Some(d) = current else {
        return;
    };
    drag.set(None);

    let rect = d.rect_to(x, y);
    let kept = state.write().session.set_crop_region(rect);
    tracing::debug!(?rect, kept, "crop box drawn");
    live_box.set(kept.then_some(rect));
}

/// Run a started operation in the background and deliver a fresh result.
fn launch(svc: AppServices, mut state: Signal<AppState>, pending: PendingOperation) {
    spawn(async move {
        let service = svc.transform();
        let outcome = pending.execute(&*service).await;
        let completion = state.write().session.complete(outcome);
        if !completion.succeeded || completion.stale {
            return;
        }

        let taken = state.write().session.take_result();
        let Some(result) = taken else {
            return;
        };

        if let TransformResult::Blob {
            kind: OperationKind::Crop,
            bytes,
            ..
        } = &result
        {
            let shown = match ImagePreview::from_bytes(bytes, "image/png") {
                Ok(preview) => Some(preview),
                Err(e) => {
                    tracing::warn!(error = %e, "cropped image could not be previewed");
                    None
                }
            };
            state.write().cropped_preview = shown;
        }

        let kind = result.kind();
        let sink = svc.sink();
        let delivered = deliver(result, &*service, &*sink).await;
        state.write().session.record_delivery(kind, &delivered);
    });
}

fn action_style(enabled: bool) -> String {
    let (bg, fg) = if enabled {
        ("#007aff", "white")
    } else {
        ("#e0e0e0", "#888")
    };
    format!(
        "padding: 10px 20px; border-radius: 8px; border: none; background: {bg}; color: {fg}; font-size: 15px;"
    )
}

fn notice_style(tone: NoticeTone) -> String {
    let color = match tone {
        NoticeTone::Info => "#007aff",
        NoticeTone::Success => "#34c759",
        NoticeTone::Error => "#ff3b30",
    };
    format!("color: {color}; font-size: 14px; margin: 12px 0;")
}
