#![forbid(unsafe_code)]

//! Explore grid with search, trending terms, and load-more.

use instacam_core::explore::ExploreState;
use instacam_core::fixtures::{self, TRENDING_SEARCHES};
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Effect;
use crate::theme::Palette;

pub struct ExploreScreen {
    explore: ExploreState,
    cursor: usize,
    searching: bool,
    trending_cursor: usize,
}

impl ExploreScreen {
    pub fn new() -> Self {
        Self {
            explore: ExploreState::new(fixtures::explore_entries(), TRENDING_SEARCHES),
            cursor: 0,
            searching: false,
            trending_cursor: 0,
        }
    }

    pub fn explore(&self) -> &ExploreState {
        &self.explore
    }

    pub fn wants_text_input(&self) -> bool {
        self.searching
    }

    fn clamp_cursor(&mut self) {
        let len = self.explore.entries().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        if self.searching {
            let toast = match key.code {
                KeyCode::Char(c) => self.explore.push_query_char(c),
                KeyCode::Backspace => self.explore.pop_query_char(),
                KeyCode::Esc | KeyCode::Enter => {
                    self.searching = false;
                    None
                }
                _ => None,
            };
            self.clamp_cursor();
            return toast.map_or(Effect::None, Effect::Toast);
        }

        match key.code {
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('m') => return Effect::Toast(self.explore.load_more().to_owned()),
            KeyCode::Char('t') => {
                // Apply the next trending term as a search.
                let term = TRENDING_SEARCHES[self.trending_cursor];
                self.trending_cursor = (self.trending_cursor + 1) % TRENDING_SEARCHES.len();
                let toast = self.explore.search(term);
                self.clamp_cursor();
                return toast.map_or(Effect::None, Effect::Toast);
            }
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(3),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 3 < self.explore.entries().len() {
                    self.cursor += 3;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => {
                if self.cursor + 1 < self.explore.entries().len() {
                    self.cursor += 1;
                }
            }
            _ => {}
        }
        Effect::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let [search, trending, grid] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        let search_style = if self.searching {
            palette.accent()
        } else {
            palette.muted()
        };
        let search_line = Paragraph::new(Line::from(vec![
            Span::styled("Search: ", search_style),
            Span::raw(self.explore.query().to_owned()),
            Span::styled(if self.searching { "▏" } else { "" }, palette.accent()),
        ]))
        .block(Block::default().borders(Borders::BOTTOM).title(" Explore "));
        frame.render_widget(search_line, search);

        let mut trend_spans = vec![Span::styled("Trending: ", palette.muted())];
        for term in self.explore.trending() {
            trend_spans.push(Span::styled(format!("#{term}  "), palette.accent()));
        }
        frame.render_widget(Paragraph::new(Line::from(trend_spans)), trending);

        let mut lines: Vec<Line> = Vec::new();
        for (row_i, row) in self.explore.entries().chunks(3).enumerate() {
            let mut spans = Vec::new();
            for (col, entry) in row.iter().enumerate() {
                let style = if row_i * 3 + col == self.cursor {
                    palette.selected()
                } else {
                    palette.base()
                };
                spans.push(Span::styled(
                    format!(" [♥{:>5} 💬{:>4}] ", entry.likes, entry.comments),
                    style,
                ));
            }
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }
        if self.explore.entries().is_empty() {
            lines.push(Line::from(Span::styled(
                "No posts match this search.",
                palette.muted(),
            )));
        }
        lines.push(Line::from(Span::styled(
            "[/] search  [t] trending  [m] load more",
            palette.muted(),
        )));
        frame.render_widget(Paragraph::new(lines).style(palette.base()), grid);
    }
}
