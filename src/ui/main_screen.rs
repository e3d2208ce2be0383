//! Main screen with curriculum and content panels

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{command_line, content, curriculum};
use crate::app::state::{AppState, Panel};
use crate::config::Config;
use crate::course::Course;
use crate::progress::ProgressStore;

/// Minimum width for the curriculum panel
const CURRICULUM_MIN_WIDTH: u16 = 20;

/// Draw the main screen
pub fn draw(
    frame: &mut Frame,
    state: &mut AppState,
    course: &Course,
    progress: &ProgressStore,
    config: &Config,
) {
    let area = frame.area();

    // Split vertically: main area and command line
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let main_area = vertical_chunks[0];
    let command_area = vertical_chunks[1];

    let chunks = create_layout(main_area, state);
    let curriculum_focused = state.focused_panel == Panel::Curriculum;
    let content_focused = state.focused_panel == Panel::Content;

    let mut panel_index = 0;

    if state.show_curriculum {
        curriculum::draw(frame, chunks[panel_index], state, course, progress, curriculum_focused);
        panel_index += 1;
    }

    content::draw(frame, chunks[panel_index], state, course, progress, config, content_focused);

    command_line::draw(frame, command_area, &state.command_line);
}

/// Create the layout constraints based on visible panels
fn create_layout(area: Rect, state: &AppState) -> Vec<Rect> {
    let mut constraints = Vec::new();

    // Curriculum panel (left): 20% width, min 20 cols
    if state.show_curriculum {
        let curriculum_width = (area.width / 5).max(CURRICULUM_MIN_WIDTH);
        constraints.push(Constraint::Length(curriculum_width));
    }

    // Content panel: flexible
    constraints.push(Constraint::Min(30));

    Layout::default().direction(Direction::Horizontal).constraints(constraints).split(area).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_with_curriculum() {
        let area = Rect::new(0, 0, 120, 40);
        let state = AppState::new();

        let chunks = create_layout(area, &state);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].width, 24);
    }

    #[test]
    fn layout_with_content_only() {
        let area = Rect::new(0, 0, 80, 40);
        let state = AppState { show_curriculum: false, ..Default::default() };

        let chunks = create_layout(area, &state);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn curriculum_respects_minimum_width() {
        let area = Rect::new(0, 0, 60, 40);
        let state = AppState::new();

        let chunks = create_layout(area, &state);
        assert_eq!(chunks[0].width, CURRICULUM_MIN_WIDTH);
    }
}
