// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// filedesk-session — The workflow core.
//
// `FileSession` is the single owner of the selected file, the one in-flight
// operation state, the drawn crop box, and the last artifact. Operations are
// split into begin / execute / complete so a UI can hold the session in a
// reactive store without keeping it borrowed across the network call.

pub mod delivery;
pub mod operation;
pub mod selection;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use delivery::{ArtifactSink, DirectorySink, deliver};
pub use operation::{Completion, OperationOutcome, OperationRequest, OperationTicket, PendingOperation};
pub use selection::{FileSelection, PreviewRef};
pub use session::FileSession;
pub use state::OperationState;
