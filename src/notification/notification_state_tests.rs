//! Tests for notification_state

use super::*;
use proptest::prelude::*;

#[test]
fn test_info_notification() {
    let notif = Notification::new("Layout: 3 panels", NotificationType::Info);
    assert_eq!(notif.message, "Layout: 3 panels");
    assert_eq!(notif.duration, Duration::from_millis(1500));
    assert_eq!(notif.style.bg, theme::notification::INFO.bg);
    assert!(!notif.is_expired());
}

#[test]
fn test_warning_notification_style() {
    let notif = Notification::new("Video API key is not configured", NotificationType::Warning);
    assert_eq!(notif.notification_type, NotificationType::Warning);
    assert_eq!(notif.style.fg, theme::notification::WARNING.fg);
    assert!(notif.duration > Duration::from_millis(1500));
}

#[test]
fn test_show_replaces_current() {
    let mut state = NotificationState::new();
    state.show("First");
    state.show("Second");
    assert_eq!(state.current_message(), Some("Second"));
    assert_eq!(state.pending_count(), 0);
}

#[test]
fn test_warnings_queue_behind_current() {
    let mut state = NotificationState::new();
    state.show_warning("Video API key is not configured");
    state.show_warning("Video API URL is not configured");

    assert_eq!(
        state.current_message(),
        Some("Video API key is not configured")
    );
    assert_eq!(state.pending_count(), 1);

    state.expire_current();
    assert!(state.clear_if_expired());
    assert_eq!(
        state.current_message(),
        Some("Video API URL is not configured")
    );

    state.expire_current();
    assert!(state.clear_if_expired());
    assert!(state.current().is_none());
    assert!(!state.clear_if_expired());
}

#[test]
fn test_clear_if_expired_keeps_fresh_notification() {
    let mut state = NotificationState::new();
    state.show("Fresh");
    assert!(!state.clear_if_expired());
    assert_eq!(state.current_message(), Some("Fresh"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_every_warning_is_eventually_shown(
        messages in prop::collection::vec("[a-zA-Z0-9 ]{1,40}", 1..8)
    ) {
        let mut state = NotificationState::new();
        for msg in &messages {
            state.show_warning(msg);
        }

        let mut seen = Vec::new();
        while let Some(message) = state.current_message() {
            seen.push(message.to_string());
            state.expire_current();
            state.clear_if_expired();
        }

        prop_assert_eq!(seen, messages);
    }
}
