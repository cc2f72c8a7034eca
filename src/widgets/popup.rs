use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Blank out an area so an overlay draws over a clean background
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
