//! Tests for notification_render

use super::*;
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_notification_to_string(
    notification: &mut NotificationState,
    width: u16,
    height: u16,
) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_notification(f, notification))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn snapshot_notification_top_right_position() {
    let mut notification = NotificationState::new();
    notification.show("Hello");

    let output = render_notification_to_string(&mut notification, 30, 7);
    assert_snapshot!(output);
}

#[test]
fn snapshot_notification_layout_change() {
    let mut notification = NotificationState::new();
    notification.show("Layout: 6 panels");

    let output = render_notification_to_string(&mut notification, 40, 8);
    assert_snapshot!(output);
}

#[test]
fn snapshot_notification_no_active() {
    let mut notification = NotificationState::new();

    let output = render_notification_to_string(&mut notification, 30, 7);
    assert_snapshot!(output);
}

#[test]
fn test_tiny_frame_skips_notification() {
    let mut notification = NotificationState::new();
    notification.show("Too big to fit here");
    let output = render_notification_to_string(&mut notification, 6, 4);
    assert!(!output.contains("Too big"));
}
