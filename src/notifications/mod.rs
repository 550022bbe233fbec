// SPDX-License-Identifier: MPL-2.0
//! Dismissible operator notices.
//!
//! Failures the operator must know about (load, save, crop) surface here;
//! the embedding view decides how to draw them.

mod manager;
mod notification;

pub use manager::{Manager, MAX_QUEUED, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
