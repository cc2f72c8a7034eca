use crate::config::{Config, PanelLayout};
use crate::notification::NotificationState;
use crate::search::{PanelSearchController, ProviderKind, SearchWorker};

/// One mounted search panel: its input buffer and its controller
#[derive(Debug)]
pub struct Panel {
    pub input: String,
    pub controller: PanelSearchController,
}

impl Panel {
    fn mount(panel_id: usize, worker: Option<&SearchWorker>, max_results: usize) -> Self {
        let mut controller = PanelSearchController::new(panel_id);
        if let Some(worker) = worker {
            controller.attach_worker(worker.clone());
        }
        controller.set_max_results(max_results);
        Self {
            input: String::new(),
            controller,
        }
    }

    pub fn id(&self) -> usize {
        self.controller.panel_id()
    }
}

pub struct App {
    pub layout: PanelLayout,
    pub panels: Vec<Panel>,
    pub focused: usize,
    pub notification: NotificationState,
    pub should_quit: bool,
    pub dev_mode: bool,
    pub video_configured: bool,
    worker: Option<SearchWorker>,
    max_results: usize,
    dirty: bool,
}

impl App {
    pub fn new(config: &Config, worker: Option<SearchWorker>) -> Self {
        let mut app = Self {
            layout: config.layout.panels,
            panels: Vec::new(),
            focused: 0,
            notification: NotificationState::new(),
            should_quit: false,
            dev_mode: config.dev_mode,
            video_configured: config.video.has_api_key() && config.video.has_api_url(),
            worker,
            max_results: config.video.max_results,
            dirty: true,
        };
        app.mount_panels();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty || self.notification.current().is_some()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Switch layout, mounting new panels or unmounting trailing ones
    ///
    /// Unmounted panels drop their controllers, which cancels any search
    /// they still have in flight.
    pub fn set_layout(&mut self, layout: PanelLayout) {
        if layout == self.layout {
            return;
        }
        self.layout = layout;
        self.mount_panels();
        self.focused = self.focused.min(self.panels.len().saturating_sub(1));
        self.dirty = true;
    }

    pub fn cycle_layout(&mut self) {
        self.set_layout(self.layout.next());
        let message = format!("Layout: {} panels", self.layout.panel_count());
        self.notification.show(&message);
    }

    fn mount_panels(&mut self) {
        let count = self.layout.panel_count();
        self.panels.truncate(count);
        while self.panels.len() < count {
            let panel_id = self.panels.len() + 1;
            let panel = Panel::mount(panel_id, self.worker.as_ref(), self.max_results);
            self.panels.push(panel);
        }
    }

    pub fn focus_next(&mut self) {
        if !self.panels.is_empty() {
            self.focused = (self.focused + 1) % self.panels.len();
            self.dirty = true;
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.panels.is_empty() {
            self.focused = (self.focused + self.panels.len() - 1) % self.panels.len();
            self.dirty = true;
        }
    }

    pub fn focused_panel(&self) -> Option<&Panel> {
        self.panels.get(self.focused)
    }

    pub fn focused_panel_mut(&mut self) -> Option<&mut Panel> {
        self.panels.get_mut(self.focused)
    }

    /// Submit the focused panel's input to its selected provider
    pub fn submit_focused(&mut self) -> bool {
        let submitted = match self.focused_panel_mut() {
            Some(panel) => {
                let text = panel.input.clone();
                panel.controller.submit(&text)
            }
            None => false,
        };
        if submitted {
            self.dirty = true;
        }
        submitted
    }

    /// Toggle the focused panel between web and video search
    pub fn toggle_focused_provider(&mut self) -> Option<ProviderKind> {
        let panel = self.focused_panel_mut()?;
        let kind = panel.controller.provider_kind().next();
        panel.controller.set_provider_kind(kind);
        self.dirty = true;
        Some(kind)
    }

    /// Poll every panel for finished searches; returns true if any changed
    pub fn poll_panels(&mut self) -> bool {
        let mut changed = false;
        for panel in &mut self.panels {
            changed |= panel.controller.poll_response_channel();
        }
        if changed {
            self.dirty = true;
        }
        changed
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
