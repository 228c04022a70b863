// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — bridges the Dioxus UI to the filedesk backend crates.
//
// Each service wraps one or more backend crate APIs in a way that is convenient
// for the UI to call (cheap to clone into closures, async where the work is).

pub mod app_services;
pub mod data_dir;
pub mod save_dialog;
