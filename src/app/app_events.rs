use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }

        self.poll_panels();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Pasted text lands in the focused input; line breaks become spaces
    pub fn handle_paste_event(&mut self, text: String) {
        let cleaned: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if let Some(panel) = self.focused_panel_mut() {
            panel.input.push_str(&cleaned);
        }
        self.mark_dirty();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            self.mark_dirty();
            return;
        }

        if self.handle_input_key(key) {
            self.mark_dirty();
        }
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('l') if ctrl => {
                self.cycle_layout();
                true
            }
            KeyCode::Char('t') if ctrl => {
                if let Some(kind) = self.toggle_focused_provider() {
                    log::debug!("Panel {} switched to {} search", self.focused + 1, kind);
                }
                true
            }
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_previous();
                true
            }
            KeyCode::Enter => {
                self.submit_focused();
                true
            }
            _ => false,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> bool {
        let Some(panel) = self.focused_panel_mut() else {
            return false;
        };

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                panel.input.clear();
                true
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                panel.input.push(c);
                true
            }
            KeyCode::Backspace => panel.input.pop().is_some(),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
