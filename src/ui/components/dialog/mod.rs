//! Dialog components for TUI

mod base;
mod thank_you_dialog;

pub use base::centered_rect;
pub use thank_you_dialog::render_thank_you_dialog;
