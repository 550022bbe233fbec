// SPDX-License-Identifier: MPL-2.0
//! Notice lifecycle: a few visible at once, the rest queued in order.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notices visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Maximum number of notices waiting behind the visible ones.
pub const MAX_QUEUED: usize = 16;

/// Visible notices plus a FIFO overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings and errors pushed afterwards are also recorded as diagnostics.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows `notification` now if there is room, otherwise queues it.
    pub fn push(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.log_warning(notification.message_key()),
                Severity::Error => handle.log_error(notification.message_key()),
                Severity::Success | Severity::Info => {}
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            if self.queue.len() == MAX_QUEUED {
                self.queue.pop_front();
            }
            self.queue.push_back(notification);
        }
    }

    /// Removes a notice wherever it is. Returns true if it was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Dismisses expired visible notices.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Dismisses visible notices expired as of `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss_at(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// The most recently shown notice.
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.visible.front()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Returns true if any visible or queued notice uses `message_key`.
    #[must_use]
    pub fn contains_key(&self, message_key: &str) -> bool {
        self.visible
            .iter()
            .chain(self.queue.iter())
            .any(|n| n.message_key() == message_key)
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Drops every notice with `message_key`, such as stale load failures
    /// once a later load succeeds.
    pub fn clear_key(&mut self, message_key: &str) {
        let visible_before = self.visible.len();
        self.visible.retain(|n| n.message_key() != message_key);
        self.queue.retain(|n| n.message_key() != message_key);
        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
    use std::time::Duration;

    #[test]
    fn overflow_is_queued_and_promoted_on_dismiss() {
        let mut manager = Manager::new();
        let first = Notification::error("one");
        let first_id = first.id();
        manager.push(first);
        manager.push(Notification::error("two"));
        manager.push(Notification::error("three"));
        manager.push(Notification::error("four"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.contains_key("four"));
        assert!(!manager.dismiss(first_id));
    }

    #[test]
    fn full_queue_drops_its_oldest_notice() {
        let mut manager = Manager::new();
        for index in 0..MAX_VISIBLE + MAX_QUEUED + 2 {
            manager.push(Notification::error(format!("failure-{index}")));
        }

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), MAX_QUEUED);
        assert!(!manager.contains_key(&format!("failure-{MAX_VISIBLE}")));
        assert!(manager.contains_key(&format!("failure-{}", MAX_VISIBLE + 2)));
        assert!(manager.contains_key(&format!("failure-{}", MAX_VISIBLE + MAX_QUEUED + 1)));
    }

    #[test]
    fn tick_dismisses_only_expired_notices() {
        let mut manager = Manager::new();
        let info = Notification::info("saved");
        let later = info.created_at() + Duration::from_secs(4);
        manager.push(info);
        manager.push(Notification::error("notice-save-failed"));

        manager.tick_at(later);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.latest().map(Notification::message_key),
            Some("notice-save-failed")
        );
    }

    #[test]
    fn clear_key_removes_matching_notices() {
        let mut manager = Manager::new();
        for _ in 0..4 {
            manager.push(Notification::error("notice-load-failed"));
        }
        manager.push(Notification::info("kept"));
        manager.clear_key("notice-load-failed");
        assert_eq!(manager.visible_count(), 1);
        assert!(manager.contains_key("kept"));

        manager.clear();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn warnings_and_errors_reach_diagnostics() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.push(Notification::success("saved"));
        manager.push(Notification::warning("notice-reencode-denied"));
        manager.push(Notification::error("notice-save-failed"));

        collector.process_pending();
        assert_eq!(collector.len(), 2);
        assert_eq!(collector.error_count(), 1);
    }
}
