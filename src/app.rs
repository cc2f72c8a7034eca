mod app_events;
mod app_render;
mod app_state;
mod panel_render;


pub use app_state::{App, Panel};
