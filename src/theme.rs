//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Top header line
pub mod header {
    use super::*;

    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const VERSION: Color = Color::Rgb(130, 133, 158);
    pub const DEV_BADGE: Style = Style::new()
        .fg(Color::Rgb(26, 26, 46))
        .bg(Color::Rgb(255, 217, 61))
        .add_modifier(Modifier::BOLD);
    pub const LAYOUT: Color = Color::Rgb(189, 147, 249);
}

/// Search panel styles
pub mod panel {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(0, 217, 255); // Electric cyan
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const TITLE: Style = Style::new().add_modifier(Modifier::BOLD);

    // Provider tags in the panel title
    pub const PROVIDER_WEB: Color = Color::Rgb(107, 203, 119);
    pub const PROVIDER_VIDEO: Color = Color::Rgb(255, 107, 157);

    pub const INPUT_PROMPT: Color = Color::Rgb(189, 147, 249);
    pub const INPUT_TEXT: Color = Color::Rgb(236, 236, 244);
    pub const INPUT_UNFOCUSED: Color = Color::Rgb(130, 133, 158);
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

    pub const HINT: Color = Color::Rgb(90, 92, 119);
    pub const LOADING: Color = Color::Rgb(255, 217, 61);

    // Result entries
    pub const RESULT_TITLE: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const RESULT_URL: Color = Color::Rgb(107, 203, 119);
    pub const RESULT_SNIPPET: Color = Color::Rgb(130, 133, 158);
    pub const VIDEO_HEADER: Style = Style::new()
        .fg(Color::Rgb(255, 107, 157))
        .add_modifier(Modifier::BOLD);
    pub const VIDEO_CHANNEL: Color = Color::Rgb(130, 133, 158);

    // Fallback and error notices
    pub const ERROR_TITLE: Style = Style::new()
        .fg(Color::Rgb(224, 108, 117))
        .add_modifier(Modifier::BOLD);
    pub const ERROR_TEXT: Color = Color::Rgb(224, 108, 117);
    pub const FALLBACK_NOTICE: Color = Color::Rgb(255, 184, 108);
}

pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };
}

/// Help line at the bottom of the screen
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(0, 217, 255);
    pub const DESCRIPTION: Color = Color::Rgb(130, 133, 158);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
