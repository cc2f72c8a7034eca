//! Transient notifications
//!
//! Short messages drawn over the panel grid: layout changes and
//! configuration warnings found at startup.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
