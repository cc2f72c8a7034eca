//! Notification state
//!
//! One notification is visible at a time. Warnings raised while another
//! notification is showing wait in a queue and appear once it expires.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Short-lived confirmation such as a layout change
    #[default]
    Info,
    /// Longer-lived notice such as a missing API key
    Warning,
}

impl NotificationType {
    fn duration(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_millis(1500),
            NotificationType::Warning => Duration::from_secs(6),
        }
    }

    fn style(self) -> NotificationStyle {
        let colors = match self {
            NotificationType::Info => &theme::notification::INFO,
            NotificationType::Warning => &theme::notification::WARNING,
        };
        NotificationStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    pending: VecDeque<(String, NotificationType)>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info notification right away, replacing whatever is visible
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationType::Info));
    }

    /// Show a warning, or queue it behind the visible notification
    pub fn show_warning(&mut self, message: &str) {
        if self.current.is_some() {
            self.pending
                .push_back((message.to_string(), NotificationType::Warning));
        } else {
            self.current = Some(Notification::new(message, NotificationType::Warning));
        }
    }

    /// Drop the visible notification once expired and promote the next queued one.
    /// Returns true if anything changed.
    pub fn clear_if_expired(&mut self) -> bool {
        let expired = self.current.as_ref().map(Notification::is_expired);
        if expired == Some(false) {
            return false;
        }

        let next = self
            .pending
            .pop_front()
            .map(|(message, kind)| Notification::new(&message, kind));
        let changed = expired.is_some() || next.is_some();
        self.current = next;
        changed
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    #[cfg(test)]
    pub fn expire_current(&mut self) {
        if let Some(notif) = self.current.as_mut() {
            notif.duration = Duration::ZERO;
            notif.created_at -= Duration::from_millis(1);
        }
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
