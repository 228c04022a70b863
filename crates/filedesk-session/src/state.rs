// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Operation lifecycle.
//
//   Idle / Succeeded / Failed  ──begin──▶  Running(kind)  ──complete──▶  Succeeded | Failed
//
// Only one Running state exists at a time. Terminal states are left only by
// starting another operation or, when nothing is running, by a new selection.

use filedesk_core::types::OperationKind;

/// State of the session's single operation slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationState {
    #[default]
    Idle,
    Running(OperationKind),
    Succeeded {
        kind: OperationKind,
        /// Name the artifact was offered under.
        suggested_name: String,
    },
    Failed {
        kind: OperationKind,
        /// Generic, user-facing reason for this kind of operation.
        reason: String,
    },
}

impl OperationState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    /// Kind of the current or last operation.
    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            Self::Idle => None,
            Self::Running(kind)
            | Self::Succeeded { kind, .. }
            | Self::Failed { kind, .. } => Some(*kind),
        }
    }
}
