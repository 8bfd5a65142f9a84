//! UI module for rendering the TUI

mod components;
mod forms;
mod landing;

use crate::app::App;
use crate::state::DialogState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    landing::draw(frame, app);

    // The active mount point's dialog overlays the page
    if let Some(mount) = app.state.active_mount() {
        let mount = app.state.mount(mount);
        match mount.dialog_state() {
            DialogState::FormOpen => forms::draw_waitlist_form(frame, mount),
            DialogState::ThankYouOpen => components::render_thank_you_dialog(
                frame,
                mount.delivered_at(),
            ),
            DialogState::Closed => {}
        }
    }
}
