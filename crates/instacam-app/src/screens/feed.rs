#![forbid(unsafe_code)]

//! Home feed: the story bar on top, the post list below.
//!
//! While a post's comment panel is open the screen is in text-input mode:
//! every printable key goes into the comment draft, Enter submits, Esc
//! closes the panel.

use instacam_core::feed::{Comment, FeedState, Post};
use instacam_core::fixtures;
use instacam_core::story::Story;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Effect;
use crate::theme::Palette;

pub struct FeedScreen {
    stories: Vec<Story>,
    feed: FeedState,
    comments: Vec<Comment>,
    cursor: usize,
    story_cursor: usize,
}

impl FeedScreen {
    pub fn new() -> Self {
        Self {
            stories: fixtures::stories(),
            feed: FeedState::new(fixtures::posts()),
            comments: fixtures::comments(),
            cursor: 0,
            story_cursor: 0,
        }
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    fn cursor_post_id(&self) -> Option<u32> {
        self.feed.posts().get(self.cursor).map(|p| p.id)
    }

    pub fn wants_text_input(&self) -> bool {
        self.feed
            .posts()
            .get(self.cursor)
            .is_some_and(|p| p.comments_open)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        let Some(post_id) = self.cursor_post_id() else {
            return Effect::None;
        };

        if self.wants_text_input() {
            match key.code {
                KeyCode::Char(c) => self.feed.draft_push(c),
                KeyCode::Backspace => self.feed.draft_pop(),
                KeyCode::Enter => {
                    if let Some(toast) = self.feed.submit_comment() {
                        return Effect::Toast(toast.to_owned());
                    }
                }
                KeyCode::Esc => {
                    self.feed.toggle_comments(post_id);
                    self.feed.draft_clear();
                }
                _ => {}
            }
            return Effect::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.feed.posts().len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Left => {
                self.story_cursor = self.story_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.story_cursor + 1 < self.stories.len() {
                    self.story_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(story) = self.stories.get(self.story_cursor) {
                    return Effect::OpenStory(story.id);
                }
            }
            KeyCode::Char('l') | KeyCode::Char(' ') => self.feed.toggle_like(post_id),
            KeyCode::Char('d') => {
                self.feed.double_tap_like(post_id);
            }
            KeyCode::Char('b') => {
                if let Some(toast) = self.feed.toggle_bookmark(post_id) {
                    return Effect::Toast(toast.to_owned());
                }
            }
            KeyCode::Char('c') => self.feed.toggle_comments(post_id),
            _ => {}
        }
        Effect::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let [story_bar, posts] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        self.render_story_bar(frame, story_bar, palette);
        self.render_posts(frame, posts, palette);
    }

    fn render_story_bar(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let mut spans = Vec::new();
        for (i, story) in self.stories.iter().enumerate() {
            let marker = if story.has_story { "●" } else { "○" };
            let style = if i == self.story_cursor {
                palette.selected()
            } else if story.has_story {
                palette.accent()
            } else {
                palette.muted()
            };
            spans.push(Span::styled(format!(" {marker} {} ", story.username), style));
        }
        let bar = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM).title(" Stories "));
        frame.render_widget(bar, area);
    }

    fn render_posts(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let mut lines: Vec<Line> = Vec::new();
        for (i, post) in self.feed.posts().iter().enumerate() {
            let selected = i == self.cursor;
            let cursor_mark = if selected { "▶ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(cursor_mark, palette.accent()),
                Span::styled(
                    post.user.username.clone(),
                    if selected {
                        palette.selected()
                    } else {
                        palette.title()
                    },
                ),
                Span::styled(format!("  {}", post.timestamp), palette.muted()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    [photo] {}", post.image),
                palette.muted(),
            )));
            lines.push(Line::from(format!("    {}", post.caption)));
            let heart = if post.is_liked { "♥" } else { "♡" };
            let bookmark = if post.is_bookmarked { "⚑" } else { "⚐" };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {heart} {} likes", post.likes),
                    if post.is_liked {
                        palette.accent()
                    } else {
                        palette.muted()
                    },
                ),
                Span::styled(format!("   💬 {} comments   ", post.comments), palette.muted()),
                Span::styled(bookmark, palette.accent()),
            ]));
            if post.comments_open {
                for comment in &self.comments {
                    lines.push(Line::from(vec![
                        Span::styled(format!("      {}: ", comment.username), palette.title()),
                        Span::raw(comment.text.clone()),
                        Span::styled(format!("  {}", comment.age), palette.muted()),
                    ]));
                }
                lines.push(Line::from(vec![
                    Span::styled("      Add a comment: ", palette.muted()),
                    Span::raw(self.feed.draft().to_owned()),
                    Span::styled("▏", palette.accent()),
                ]));
            }
            lines.push(Line::default());
        }

        // Scroll so the selected post fits in view, open comment panel
        // (canned comments plus the draft line) included.
        let rows_for = |post: &Post| {
            if post.comments_open {
                6 + self.comments.len()
            } else {
                5
            }
        };
        let top: usize = self
            .feed
            .posts()
            .iter()
            .take(self.cursor)
            .map(rows_for)
            .sum();
        let bottom = top + self.feed.posts().get(self.cursor).map(rows_for).unwrap_or(0);
        let scroll = bottom.saturating_sub(area.height as usize) as u16;
        let widget = Paragraph::new(lines).style(palette.base()).scroll((scroll, 0));
        frame.render_widget(widget, area);
    }
}
