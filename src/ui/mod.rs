//! UI rendering components

pub mod command_line;
pub mod content;
pub mod curriculum;
pub mod help;
pub mod main_screen;
pub mod quiz_panel;
pub mod topic_footer;

use ratatui::Frame;

use crate::app::state::AppState;
use crate::config::Config;
use crate::course::Course;
use crate::progress::ProgressStore;

/// Main draw function
pub fn draw(
    frame: &mut Frame,
    state: &mut AppState,
    course: &Course,
    progress: &ProgressStore,
    config: &Config,
) {
    main_screen::draw(frame, state, course, progress, config);

    let area = frame.area();

    if let Some(quiz) = &state.quiz {
        quiz_panel::draw(frame, area, quiz);
    }

    if state.show_help {
        help::draw(frame, area);
    }
}
