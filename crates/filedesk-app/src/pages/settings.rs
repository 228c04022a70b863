// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — service addresses, downloads and preview options.

use std::path::PathBuf;

use dioxus::prelude::*;

use filedesk_core::human_errors::humanize_error;

use crate::services::app_services::AppServices;
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<(String, bool)>::None);

    let config = state.read().config.clone();
    let download_dir = config
        .download_dir
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Services" }
                UrlRow {
                    label: "Compression service",
                    value: config.compress_base_url.clone(),
                    on_change: move |v: String| { state.write().config.compress_base_url = v; },
                }
                UrlRow {
                    label: "Conversion service",
                    value: config.convert_base_url.clone(),
                    on_change: move |v: String| { state.write().config.convert_base_url = v; },
                }
                UrlRow {
                    label: "Crop service",
                    value: config.crop_base_url.clone(),
                    on_change: move |v: String| { state.write().config.crop_base_url = v; },
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Request timeout (seconds)" }
                    input {
                        r#type: "number",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{config.request_timeout_secs}",
                        onchange: move |evt| {
                            if let Ok(secs) = evt.value().parse::<u64>()
                                && secs > 0
                            {
                                state.write().config.request_timeout_secs = secs;
                            }
                        },
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Downloads" }
                div { style: "padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Save folder" }
                    div { style: "display: flex; gap: 8px; margin-top: 8px;",
                        input {
                            style: "flex: 1; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                            placeholder: "Ask every time",
                            value: "{download_dir}",
                            onchange: move |evt| {
                                let value = evt.value();
                                let trimmed = value.trim();
                                state.write().config.download_dir =
                                    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
                            },
                        }
                        button {
                            style: "padding: 4px 12px; border-radius: 4px; border: 1px solid #ccc; background: white;",
                            onclick: move |_| {
                                if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                                    state.write().config.download_dir = Some(dir);
                                }
                            },
                            "Browse"
                        }
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Cropping" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Preview width (pixels)" }
                    input {
                        r#type: "number",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{config.preview_max_width}",
                        onchange: move |evt| {
                            if let Ok(width) = evt.value().parse::<u32>()
                                && width >= 64
                            {
                                let mut app = state.write();
                                app.config.preview_max_width = width;
                                // The drawn box is in the old displayed space.
                                app.session.clear_crop_region();
                            }
                        },
                    }
                }
                SettingRow {
                    label: "Keep the crop box square",
                    checked: config.lock_square_crop,
                    on_toggle: move |v: bool| { state.write().config.lock_square_crop = v; },
                }
            }

            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                save_msg.set(Some(("Settings saved.".into(), true)));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                let human = humanize_error(&e);
                                save_msg.set(Some((format!("{} {}", human.message, human.suggestion), false)));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some((ref msg, ok)) = *save_msg.read() {
                p { style: save_msg_style(ok),
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "Filedesk v{VERSION}"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}

#[component]
fn UrlRow(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { style: "padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                style: "display: block; width: 100%; margin-top: 8px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; box-sizing: border-box;",
                value: "{value}",
                onchange: move |evt| {
                    on_change.call(evt.value().trim().to_string());
                },
            }
        }
    }
}

#[component]
fn SettingRow(label: &'static str, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt| {
                    on_toggle.call(evt.checked());
                },
            }
        }
    }
}

fn save_msg_style(ok: bool) -> String {
    let color = if ok { "#34c759" } else { "#ff3b30" };
    format!("color: {color}; font-size: 14px; text-align: center; margin-top: 8px;")
}
