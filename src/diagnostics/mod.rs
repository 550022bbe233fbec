// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: a bounded record of operator actions, warnings and errors.
//!
//! - [`DiagnosticsHandle`]: Non-blocking sender handed to the editor
//! - [`DiagnosticsCollector`]: Drains the channel into a [`CircularBuffer`]
//! - [`DiagnosticEvent`]: Timestamped [`DiagnosticEventKind`]

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
