//! Application state module

mod app_state;
mod controller;
mod dialog;
mod forms;
mod mount;
mod validation;

pub use app_state::*;
pub use controller::*;
pub use dialog::*;
pub use forms::*;
pub use mount::*;
