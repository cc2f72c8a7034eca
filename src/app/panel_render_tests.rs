//! Tests for panel_render

use super::*;
use crate::search::{
    FALLBACK_VIDEO_IDS, PanelSearchController, Query, VideoResult, WebResult,
};
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 16;

fn render_view_to_string(view: &PanelView) -> String {
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_panel(f, area, view);
        })
        .unwrap();
    terminal.backend().to_string()
}

fn view<'a>(kind: ProviderKind, input: &'a str, state: &'a PanelState) -> PanelView<'a> {
    PanelView {
        panel_id: 1,
        input,
        kind,
        state,
        focused: false,
        video_configured: true,
    }
}

fn state_with(status: PanelStatus, results: ResultList, error: Option<&str>) -> PanelState {
    PanelState {
        query: Query::new("cats", ProviderKind::Video),
        status,
        results,
        error_message: error.map(str::to_string),
    }
}

fn video(id: &str, title: &str) -> VideoResult {
    VideoResult {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        thumbnail_url: String::new(),
        channel_title: "Some Channel".to_string(),
        published_at: String::new(),
    }
}

#[test]
fn snapshot_panel_idle_web() {
    let state = PanelState::default();
    let output = render_view_to_string(&view(ProviderKind::Web, "", &state));
    assert_snapshot!(output);
}

#[test]
fn snapshot_panel_idle_video_unconfigured() {
    let state = PanelState::default();
    let mut panel_view = view(ProviderKind::Video, "", &state);
    panel_view.panel_id = 2;
    panel_view.video_configured = false;
    let output = render_view_to_string(&panel_view);
    assert_snapshot!(output);
}

#[test]
fn snapshot_panel_loading() {
    let state = state_with(PanelStatus::Loading, ResultList::Empty, None);
    let output = render_view_to_string(&view(ProviderKind::Video, "cats", &state));
    assert_snapshot!(output);
}

#[test]
fn snapshot_panel_success_web() {
    let results = ResultList::Web(vec![WebResult {
        id: 1,
        title: "cats - Web search".to_string(),
        url: "https://www.google.com/search?q=cats".to_string(),
        snippet: "Search the web for \"cats\".".to_string(),
    }]);
    let state = state_with(PanelStatus::Success, results, None);
    let output = render_view_to_string(&view(ProviderKind::Web, "cats", &state));
    assert_snapshot!(output);
}

#[test]
fn snapshot_panel_success_video() {
    let results = ResultList::Video(vec![
        video("abc123", "Cat video"),
        video("def456", "More cats"),
    ]);
    let state = state_with(PanelStatus::Success, results, None);
    let output = render_view_to_string(&view(ProviderKind::Video, "cats", &state));
    assert_snapshot!(output);
}

#[test]
fn snapshot_panel_success_no_results() {
    let state = state_with(PanelStatus::Success, ResultList::Video(Vec::new()), None);
    let output = render_view_to_string(&view(ProviderKind::Video, "cats", &state));
    assert_snapshot!(output);
}

#[test]
fn snapshot_panel_fallback() {
    let state = state_with(
        PanelStatus::Fallback,
        ResultList::Fallback(FALLBACK_VIDEO_IDS),
        Some("[Video] API error (403): Forbidden"),
    );
    let output = render_view_to_string(&view(ProviderKind::Video, "cats", &state));
    assert_snapshot!(output);
}

#[test]
fn snapshot_panel_error() {
    let state = state_with(
        PanelStatus::Error,
        ResultList::Empty,
        Some("Search worker unavailable"),
    );
    let output = render_view_to_string(&view(ProviderKind::Web, "cats", &state));
    assert_snapshot!(output);
}

#[test]
fn test_panel_view_reads_from_controller() {
    let mut controller = PanelSearchController::new(4);
    controller.set_provider_kind(ProviderKind::Video);
    let panel = Panel {
        input: "lofi".to_string(),
        controller,
    };

    let view = PanelView::of(&panel, true, false);
    assert_eq!(view.panel_id, 4);
    assert_eq!(view.input, "lofi");
    assert_eq!(view.kind, ProviderKind::Video);
    assert_eq!(view.state.status, PanelStatus::Idle);
    assert!(view.focused);
    assert!(!view.video_configured);
}
