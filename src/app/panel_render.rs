//! Rendering for a single search panel

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::app_state::Panel;
use crate::search::{PanelState, PanelStatus, ProviderKind, ResultList, embed_url};
use crate::theme;

/// Everything needed to draw one panel
pub struct PanelView<'a> {
    pub panel_id: usize,
    pub input: &'a str,
    pub kind: ProviderKind,
    pub state: &'a PanelState,
    pub focused: bool,
    pub video_configured: bool,
}

impl<'a> PanelView<'a> {
    pub fn of(panel: &'a Panel, focused: bool, video_configured: bool) -> Self {
        Self {
            panel_id: panel.id(),
            input: &panel.input,
            kind: panel.controller.provider_kind(),
            state: panel.controller.state(),
            focused,
            video_configured,
        }
    }
}

pub fn render_panel(frame: &mut Frame, area: Rect, view: &PanelView) {
    let border_color = if view.focused {
        theme::panel::BORDER_FOCUSED
    } else {
        theme::panel::BORDER_UNFOCUSED
    };
    let provider_color = match view.kind {
        ProviderKind::Web => theme::panel::PROVIDER_WEB,
        ProviderKind::Video => theme::panel::PROVIDER_VIDEO,
    };

    let title = Line::from(vec![
        Span::styled(format!(" Panel {} ", view.panel_id), theme::panel::TITLE),
        Span::styled(
            format!("[{}] ", view.kind.label()),
            Style::default().fg(provider_color),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

    frame.render_widget(
        Paragraph::new(input_line(view.input, view.focused)),
        input_area,
    );

    let body = body_lines(view.state, view.kind, view.video_configured);
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), body_area);
}

fn input_line(input: &str, focused: bool) -> Line<'static> {
    let text_color = if focused {
        theme::panel::INPUT_TEXT
    } else {
        theme::panel::INPUT_UNFOCUSED
    };

    let mut spans = vec![
        Span::styled("> ", Style::default().fg(theme::panel::INPUT_PROMPT)),
        Span::styled(input.to_string(), Style::default().fg(text_color)),
    ];
    if focused {
        spans.push(Span::styled(" ", theme::panel::CURSOR));
    }
    Line::from(spans)
}

/// Lines for the panel body, chosen by the panel's status
pub fn body_lines(
    state: &PanelState,
    kind: ProviderKind,
    video_configured: bool,
) -> Vec<Line<'static>> {
    match state.status {
        PanelStatus::Idle => idle_lines(kind, video_configured),
        PanelStatus::Loading => vec![Line::styled(
            "Searching...",
            Style::default().fg(theme::panel::LOADING),
        )],
        PanelStatus::Success => result_lines(&state.results),
        PanelStatus::Fallback => {
            let message = state.error_message.clone().unwrap_or_default();
            fallback_lines(&message, &state.results)
        }
        PanelStatus::Error => {
            let message = state.error_message.clone().unwrap_or_default();
            vec![
                Line::styled("Error", theme::panel::ERROR_TITLE),
                Line::styled(message, Style::default().fg(theme::panel::ERROR_TEXT)),
            ]
        }
    }
}

fn idle_lines(kind: ProviderKind, video_configured: bool) -> Vec<Line<'static>> {
    let hint_style = Style::default().fg(theme::panel::HINT);
    let mut lines = vec![Line::styled(
        match kind {
            ProviderKind::Web => "Type a query and press Enter to search the web",
            ProviderKind::Video => "Type a query and press Enter to search videos",
        },
        hint_style,
    )];
    if kind == ProviderKind::Video && !video_configured {
        lines.push(Line::styled(
            "Video API not configured: fallback videos will be shown",
            hint_style,
        ));
    }
    lines
}

fn result_lines(results: &ResultList) -> Vec<Line<'static>> {
    let title_style = theme::panel::RESULT_TITLE;
    let url_style = Style::default().fg(theme::panel::RESULT_URL);
    let muted = Style::default().fg(theme::panel::RESULT_SNIPPET);

    let mut lines = Vec::new();
    match results {
        ResultList::Web(items) if !items.is_empty() => {
            for item in items {
                lines.push(Line::styled(item.title.clone(), title_style));
                lines.push(Line::styled(item.url.clone(), url_style));
                lines.push(Line::styled(item.snippet.clone(), muted));
                lines.push(Line::default());
            }
        }
        ResultList::Video(items) if !items.is_empty() => {
            for (index, video) in items.iter().enumerate() {
                lines.push(Line::styled(
                    format!("{}. {}", index + 1, video.title),
                    theme::panel::VIDEO_HEADER,
                ));
                lines.push(Line::styled(
                    video.channel_title.clone(),
                    Style::default().fg(theme::panel::VIDEO_CHANNEL),
                ));
                lines.push(Line::styled(video.embed_url(), url_style));
                lines.push(Line::default());
            }
        }
        _ => lines.push(Line::styled("No results", muted)),
    }
    lines
}

fn fallback_lines(message: &str, results: &ResultList) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("API error", theme::panel::ERROR_TITLE),
        Line::styled(
            message.to_string(),
            Style::default().fg(theme::panel::ERROR_TEXT),
        ),
        Line::default(),
        Line::styled(
            "Showing fallback videos",
            Style::default().fg(theme::panel::FALLBACK_NOTICE),
        ),
    ];

    if let ResultList::Fallback(ids) = results {
        for (index, id) in ids.iter().enumerate() {
            lines.push(Line::styled(
                format!("Video {}: {}", index + 1, id),
                theme::panel::VIDEO_HEADER,
            ));
            lines.push(Line::styled(
                embed_url(id),
                Style::default().fg(theme::panel::RESULT_URL),
            ));
        }
    }
    lines
}

#[cfg(test)]
#[path = "panel_render_tests.rs"]
mod panel_render_tests;
