//! Panel grid layout
//!
//! Splits the main area into one rectangle per search panel:
//! 2 panels side by side, 3 panels side by side, or 6 panels as 2 rows of 3.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::config::PanelLayout;

/// Rows and columns of the grid for a layout
pub fn grid_shape(layout: PanelLayout) -> (usize, usize) {
    match layout {
        PanelLayout::Two => (1, 2),
        PanelLayout::Three => (1, 3),
        PanelLayout::Six => (2, 3),
    }
}

/// Rectangles for every panel, row-major, `layout.panel_count()` long
pub fn panel_areas(area: Rect, layout: PanelLayout) -> Vec<Rect> {
    let (rows, cols) = grid_shape(layout);

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols])
                .split(*row)
                .to_vec()
        })
        .collect()
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
