#![forbid(unsafe_code)]

//! Settings: theme toggle, a few local-only preference switches, sign out.
//!
//! The preference switches flip local state and nothing else; only the
//! theme toggle and sign out reach beyond this screen.

use instacam_core::Theme;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem};

use super::Effect;
use crate::theme::Palette;

const ROW_THEME: usize = 0;
const ROW_PRIVATE: usize = 1;
const ROW_ACTIVITY: usize = 2;
const ROW_PUSH: usize = 3;
const ROW_SIGN_OUT: usize = 4;
const ROW_COUNT: usize = 5;

pub struct SettingsScreen {
    cursor: usize,
    private_account: bool,
    show_activity: bool,
    push_notifications: bool,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            private_account: false,
            show_activity: true,
            push_notifications: true,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < ROW_COUNT {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => match self.cursor {
                ROW_THEME => return Effect::ToggleTheme,
                ROW_PRIVATE => self.private_account = !self.private_account,
                ROW_ACTIVITY => self.show_activity = !self.show_activity,
                ROW_PUSH => self.push_notifications = !self.push_notifications,
                _ => return Effect::SignOut,
            },
            _ => {}
        }
        Effect::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, theme: Theme) {
        let on_off = |v: bool| if v { "on" } else { "off" };
        let rows = [
            format!(" Toggle theme (current: {})", theme.as_str()),
            format!(" Private account: {}", on_off(self.private_account)),
            format!(" Show activity status: {}", on_off(self.show_activity)),
            format!(" Push notifications: {}", on_off(self.push_notifications)),
            " Sign out".to_owned(),
        ];

        let items: Vec<ListItem> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let style = if i == self.cursor {
                    palette.selected()
                } else if i == ROW_SIGN_OUT {
                    ratatui::style::Style::default().fg(palette.danger)
                } else {
                    palette.base()
                };
                ListItem::new(Line::from(row)).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title(Span::styled(" Settings ", palette.title())));
        frame.render_widget(list, area);
    }
}
