use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use super::panel_render::{PanelView, render_panel};
use crate::layout::panel_areas;
use crate::notification::render_notification;
use crate::theme;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [header_area, grid_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);

        for (index, (panel, area)) in self
            .panels
            .iter()
            .zip(panel_areas(grid_area, self.layout))
            .enumerate()
        {
            let view = PanelView::of(panel, index == self.focused, self.video_configured);
            render_panel(frame, area, &view);
        }

        crate::help::help_line_render::render_line(self, frame, help_area);

        render_notification(frame, &mut self.notification);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" multisearch ", theme::header::TITLE),
            Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(theme::header::VERSION),
            ),
        ];
        if self.dev_mode {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(" DEV ", theme::header::DEV_BADGE));
        }
        spans.push(Span::styled(
            format!("  {} panels", self.layout.panel_count()),
            Style::default().fg(theme::header::LAYOUT),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
