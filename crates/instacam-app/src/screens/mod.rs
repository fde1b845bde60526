#![forbid(unsafe_code)]

//! The seven top-level screens plus the auth forms, the story overlay, and
//! the not-found fallback.
//!
//! A screen is built fresh every time its view is selected, so transient
//! state (cursors, drafts, toggles) resets on navigation. Key handling
//! returns an [`Effect`] for anything that reaches beyond the screen itself;
//! the shell applies it.

pub mod auth;
pub mod explore;
pub mod feed;
pub mod messages;
pub mod not_found;
pub mod notifications;
pub mod profile;
pub mod settings;
pub mod story_viewer;
pub mod upload;

use instacam_core::{Theme, View};
use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::theme::Palette;

/// What a key press asks the shell to do.
#[derive(Debug)]
pub enum Effect {
    None,
    /// Show a toast.
    Toast(String),
    /// Switch the active view.
    Navigate(View),
    /// Open the story viewer on the given story id.
    OpenStory(u32),
    /// Start the simulated upload delay.
    BeginShare,
    /// Flip light/dark and persist.
    ToggleTheme,
    /// End the session.
    SignOut,
}

/// The active screen's state.
pub enum Screen {
    Feed(feed::FeedScreen),
    Explore(explore::ExploreScreen),
    Upload(upload::UploadScreen),
    Profile(profile::ProfileScreen),
    Notifications(notifications::NotificationsScreen),
    Messages(messages::MessagesScreen),
    Settings(settings::SettingsScreen),
    NotFound(not_found::NotFoundScreen),
}

impl Screen {
    /// Build the screen for a view from fixture data.
    pub fn build(view: View) -> Screen {
        match view {
            View::Home => Screen::Feed(feed::FeedScreen::new()),
            View::Explore => Screen::Explore(explore::ExploreScreen::new()),
            View::Upload => Screen::Upload(upload::UploadScreen::new()),
            View::Profile => Screen::Profile(profile::ProfileScreen::new()),
            View::Notifications => Screen::Notifications(notifications::NotificationsScreen::new()),
            View::Messages => Screen::Messages(messages::MessagesScreen::new()),
            View::Settings => Screen::Settings(settings::SettingsScreen::new()),
        }
    }

    /// The fallback screen for an unknown route.
    pub fn not_found(route: impl Into<String>) -> Screen {
        Screen::NotFound(not_found::NotFoundScreen::new(route))
    }

    /// Whether the screen is currently capturing text input. While true the
    /// shell suppresses its single-character shortcuts.
    pub fn wants_text_input(&self) -> bool {
        match self {
            Screen::Feed(s) => s.wants_text_input(),
            Screen::Explore(s) => s.wants_text_input(),
            Screen::Upload(s) => s.wants_text_input(),
            Screen::Messages(s) => s.wants_text_input(),
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        match self {
            Screen::Feed(s) => s.handle_key(key),
            Screen::Explore(s) => s.handle_key(key),
            Screen::Upload(s) => s.handle_key(key),
            Screen::Profile(s) => s.handle_key(key),
            Screen::Notifications(s) => s.handle_key(key),
            Screen::Messages(s) => s.handle_key(key),
            Screen::Settings(s) => s.handle_key(key),
            Screen::NotFound(s) => s.handle_key(key),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, theme: Theme) {
        match self {
            Screen::Feed(s) => s.render(frame, area, palette),
            Screen::Explore(s) => s.render(frame, area, palette),
            Screen::Upload(s) => s.render(frame, area, palette),
            Screen::Profile(s) => s.render(frame, area, palette),
            Screen::Notifications(s) => s.render(frame, area, palette),
            Screen::Messages(s) => s.render(frame, area, palette),
            Screen::Settings(s) => s.render(frame, area, palette, theme),
            Screen::NotFound(s) => s.render(frame, area, palette),
        }
    }
}
