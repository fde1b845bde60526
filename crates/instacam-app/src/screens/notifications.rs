#![forbid(unsafe_code)]

//! Display-only notification list.

use instacam_core::fixtures::{self, Notification, NotificationKind};
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem};

use super::Effect;
use crate::theme::Palette;

pub struct NotificationsScreen {
    notifications: Vec<Notification>,
    cursor: usize,
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self {
            notifications: fixtures::notifications(),
            cursor: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.notifications.len() {
                    self.cursor += 1;
                }
            }
            _ => {}
        }
        Effect::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let items: Vec<ListItem> = self
            .notifications
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let icon = match n.kind {
                    NotificationKind::Like => "♥",
                    NotificationKind::Follow => "+",
                    NotificationKind::Comment => "✎",
                    NotificationKind::Mention => "@",
                };
                let unread = if n.read { "  " } else { "● " };
                let mut spans = vec![
                    Span::styled(unread, palette.accent()),
                    Span::styled(format!("{icon} "), palette.accent()),
                    Span::styled(n.username.clone(), palette.title()),
                    Span::raw(format!(" {} ", n.message)),
                    Span::styled(n.timestamp.clone(), palette.muted()),
                ];
                if n.kind == NotificationKind::Follow {
                    spans.push(Span::styled("  [Follow back]", palette.selected()));
                }
                let line = Line::from(spans);
                let style = if i == self.cursor {
                    palette.selected()
                } else {
                    palette.base()
                };
                ListItem::new(line).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::bordered().title(Span::styled(" Notifications ", palette.title())),
        );
        frame.render_widget(list, area);
    }
}
