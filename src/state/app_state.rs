//! Application state definitions

use super::mount::{MountPoint, WaitlistMount};

/// Service titles shown in the services section of the landing page
pub const SERVICES: &[&str] = &[
    "Love & Relationships",
    "Marriage",
    "Career and Profession",
    "Education",
    "Birth Chart Reading",
    "Daily Guidance",
    "Relationship Compatibility",
    "Life Transitions",
];

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// One independent workflow per mount point, indexed by [`MountPoint::index`]
    mounts: [WaitlistMount; 3],
    /// Entry point highlighted on the landing page
    pub selected_mount: MountPoint,
    /// Non-blocking notice shown in the status bar
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mounts: MountPoint::ALL.map(WaitlistMount::new),
            selected_mount: MountPoint::Hero,
            status_message: None,
        }
    }
}

impl AppState {
    pub fn mount(&self, mount: MountPoint) -> &WaitlistMount {
        &self.mounts[mount.index()]
    }

    pub fn mount_mut(&mut self, mount: MountPoint) -> &mut WaitlistMount {
        &mut self.mounts[mount.index()]
    }

    /// The mount point whose dialog is currently shown, if any.
    ///
    /// Dialogs are modal, so in practice at most one mount is open at a time.
    pub fn active_mount(&self) -> Option<MountPoint> {
        self.mounts
            .iter()
            .find(|m| !m.is_closed())
            .map(WaitlistMount::mount)
    }

    /// Number of mount points with a transmission in flight
    pub fn submissions_in_flight(&self) -> usize {
        self.mounts.iter().filter(|m| m.is_submitting()).count()
    }

    pub fn select_next_mount(&mut self) {
        self.selected_mount = self.selected_mount.next();
    }

    pub fn select_prev_mount(&mut self) {
        self.selected_mount = self.selected_mount.prev();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
