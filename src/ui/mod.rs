//! UI module for rendering the TUI

mod dialog;
mod episodes;
mod forms;
mod layout;
mod podcasts;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let content_area = layout::content_area(area);

    // Draw main content based on current view
    match app.state.current_view {
        View::Login => forms::draw_login(frame, content_area, app),
        View::CreateAccount => forms::draw_create_account(frame, content_area, app),
        View::Podcasts => podcasts::draw(frame, content_area, app),
        View::Episodes => episodes::draw(frame, content_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything (modal)
    if let Some(message) = app.state.current_error() {
        dialog::render_error_dialog(frame, message);
    }
}
