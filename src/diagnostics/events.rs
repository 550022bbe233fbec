// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types recorded while the editor runs.

use crate::domain::editing::{AdjustmentKind, BorderStyle, FrameStyle, StylisticFilter};
use std::time::Instant;

/// Operator actions worth correlating with failures.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    // ==========================================================================
    // Session
    // ==========================================================================
    SelectPhoto { index: usize },
    DeletePhoto { index: usize },
    CloseEditor,

    // ==========================================================================
    // Edit state
    // ==========================================================================
    SetAdjustment { kind: AdjustmentKind, value: i32 },
    SetFilter { filter: StylisticFilter },
    SetFrame { style: FrameStyle },
    SetBorder { style: BorderStyle },
    AddTextWatermark,
    AddImageWatermark,
    RemoveWatermark,
    ResetAll,

    // ==========================================================================
    // Commit
    // ==========================================================================
    EnableCrop,
    ApplyCrop,
    CancelCrop,
    RotateLeft,
    RotateRight,
    Save,
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic time of the event.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        details: Option<String>,
    },
    /// Recoverable problem, such as a source that denies read-back.
    Warning { message: String },
    /// Failed operation surfaced to the operator.
    Error { message: String },
}

impl DiagnosticEventKind {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, DiagnosticEventKind::Error { .. })
    }
}
