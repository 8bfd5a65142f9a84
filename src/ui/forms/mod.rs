//! Form rendering module
//!
//! - `field_renderer`: single field with label, placeholder and inline error
//! - `waitlist_form`: the "Join Our Waitlist" dialog

mod field_renderer;
mod waitlist_form;

pub use waitlist_form::draw_waitlist_form;
