//! Dialog coordinator: which waitlist dialog a mount point shows

/// Exactly one of these is active per mount point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    FormOpen,
    ThankYouOpen,
}

/// State machine for one mount point's dialogs.
///
/// ```text
/// Closed --open_form--> FormOpen --show_thank_you--> ThankYouOpen
///   ^                      |                              |
///   +-------dismiss--------+-------------dismiss----------+
/// ```
#[derive(Debug, Default)]
pub struct DialogCoordinator {
    state: DialogState,
    /// Incremented every time the form opens
    session: u64,
}

impl DialogCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Identifies the current (or most recent) form session
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_closed(&self) -> bool {
        self.state == DialogState::Closed
    }

    /// `Closed -> FormOpen`; returns false from any other state
    pub fn open_form(&mut self) -> bool {
        if self.state != DialogState::Closed {
            return false;
        }
        self.state = DialogState::FormOpen;
        self.session += 1;
        true
    }

    /// `FormOpen -> ThankYouOpen`; returns false from any other state
    pub fn show_thank_you(&mut self) -> bool {
        if self.state != DialogState::FormOpen {
            return false;
        }
        self.state = DialogState::ThankYouOpen;
        true
    }

    /// Close whichever dialog is open; returns the state that was closed
    pub fn dismiss(&mut self) -> Option<DialogState> {
        match self.state {
            DialogState::Closed => None,
            open => {
                self.state = DialogState::Closed;
                Some(open)
            }
        }
    }
}
