//! Profile and settings.
//!
//! No sub-views. Dark mode lives in the navigator, so the screen only keeps
//! the notification switch and a cursor over the settings rows.

use super::step_cursor;

/// Settings rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    DarkMode,
    Notifications,
    Privacy,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 3] = [
        SettingsRow::DarkMode,
        SettingsRow::Notifications,
        SettingsRow::Privacy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsRow::DarkMode => "Dark Mode",
            SettingsRow::Notifications => "Push Notifications",
            SettingsRow::Privacy => "Privacy",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            SettingsRow::DarkMode => "Switch between light and dark theme",
            SettingsRow::Notifications => "Exercise reminders and updates",
            SettingsRow::Privacy => "Data and privacy settings",
        }
    }
}

#[derive(Debug)]
pub struct ProfileScreen {
    notifications: bool,
    cursor: usize,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            notifications: true,
            cursor: 0,
        }
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.cursor.min(SettingsRow::ALL.len() - 1)]
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = step_cursor(self.cursor, delta, SettingsRow::ALL.len());
    }
}
