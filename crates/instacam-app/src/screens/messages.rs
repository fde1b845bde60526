#![forbid(unsafe_code)]

//! Direct messages: conversation list, thread view, and the message draft.

use instacam_core::fixtures;
use instacam_core::messages::MessagesState;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::Effect;
use crate::theme::Palette;

pub struct MessagesScreen {
    state: MessagesState,
    cursor: usize,
}

impl MessagesScreen {
    pub fn new() -> Self {
        Self {
            state: MessagesState::new(fixtures::conversations()),
            cursor: 0,
        }
    }

    pub fn state(&self) -> &MessagesState {
        &self.state
    }

    pub fn wants_text_input(&self) -> bool {
        self.state.selected().is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        if self.state.selected().is_some() {
            match key.code {
                KeyCode::Char(c) => self.state.draft_push(c),
                KeyCode::Backspace => self.state.draft_pop(),
                KeyCode::Enter => {
                    self.state.send();
                }
                KeyCode::Esc => self.state.deselect(),
                _ => {}
            }
            return Effect::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.state.conversations().len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(conv) = self.state.conversations().get(self.cursor) {
                    let id = conv.id;
                    self.state.select(id);
                }
            }
            _ => {}
        }
        Effect::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        match self.state.selected() {
            Some(conv) => {
                let [thread, draft] =
                    Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

                let mut lines = Vec::new();
                for msg in &conv.messages {
                    let who = if msg.from_me { "You" } else { &conv.username };
                    lines.push(Line::from(vec![
                        Span::styled(format!("{who}: "), palette.title()),
                        Span::raw(msg.text.clone()),
                        Span::styled(format!("  {}", msg.timestamp), palette.muted()),
                    ]));
                }
                let online = if conv.online { " (online)" } else { "" };
                let widget = Paragraph::new(lines).block(
                    Block::default()
                        .borders(Borders::BOTTOM)
                        .title(format!(" {}{online} ", conv.username)),
                );
                frame.render_widget(widget, thread);

                let draft_widget = Paragraph::new(Line::from(vec![
                    Span::raw(self.state.draft().to_owned()),
                    Span::styled("▏", palette.accent()),
                ]))
                .block(Block::bordered().title(" Message - [Enter] send, [Esc] back "));
                frame.render_widget(draft_widget, draft);
            }
            None => {
                let items: Vec<ListItem> = self
                    .state
                    .conversations()
                    .iter()
                    .enumerate()
                    .map(|(i, conv)| {
                        let dot = if conv.online { "● " } else { "  " };
                        let badge = if conv.unread > 0 {
                            format!(" ({})", conv.unread)
                        } else {
                            String::new()
                        };
                        let line = Line::from(vec![
                            Span::styled(dot, palette.accent()),
                            Span::styled(conv.username.clone(), palette.title()),
                            Span::styled(badge, palette.accent()),
                            Span::styled(
                                format!("  {}  {}", conv.last_message, conv.timestamp),
                                palette.muted(),
                            ),
                        ]);
                        let style = if i == self.cursor {
                            palette.selected()
                        } else {
                            palette.base()
                        };
                        ListItem::new(line).style(style)
                    })
                    .collect();
                let list = List::new(items).block(
                    Block::bordered().title(Span::styled(" Messages ", palette.title())),
                );
                frame.render_widget(list, area);
            }
        }
    }
}
