#![forbid(unsafe_code)]

//! Profile: header with follow toggle, stats, and the Posts/Saved grid tabs.

use instacam_core::fixtures;
use instacam_core::profile::{ProfileState, ProfileTab, format_count, grid_overlay_counts};
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use super::Effect;
use crate::theme::Palette;

pub struct ProfileScreen {
    state: ProfileState,
    cursor: usize,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            state: ProfileState::new(
                fixtures::profile(),
                fixtures::user_posts(),
                fixtures::saved_posts(),
            ),
            cursor: 0,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    fn grid_len(&self) -> usize {
        match self.state.tab() {
            ProfileTab::Posts => self.state.user_posts.len(),
            ProfileTab::Saved => self.state.saved_posts.len(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        match key.code {
            KeyCode::Char('f') => return Effect::Toast(self.state.toggle_follow().to_owned()),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                let next = match self.state.tab() {
                    ProfileTab::Posts => ProfileTab::Saved,
                    ProfileTab::Saved => ProfileTab::Posts,
                };
                self.state.set_tab(next);
                self.cursor = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(3),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 3 < self.grid_len() {
                    self.cursor += 3;
                }
            }
            _ => {}
        }
        Effect::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let [header, tabs, grid] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        let profile = &self.state.profile;
        let verified = if profile.is_verified { " ✓" } else { "" };
        let follow_label = if self.state.is_following() {
            "[f] Following"
        } else {
            "[f] Follow"
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(profile.username.clone(), palette.title()),
                Span::styled(verified, palette.accent()),
                Span::raw("   "),
                Span::styled(follow_label, palette.selected()),
            ]),
            Line::from(profile.name.clone()),
            Line::from(vec![
                Span::styled(format!("{} posts   ", format_count(profile.posts)), palette.base()),
                Span::styled(
                    format!("{} followers   ", format_count(self.state.follower_count())),
                    palette.base(),
                ),
                Span::styled(
                    format!("{} following", format_count(profile.following)),
                    palette.base(),
                ),
            ]),
            Line::from(Span::styled(
                profile.bio.replace('\n', " · "),
                palette.muted(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), header);

        let selected_tab = match self.state.tab() {
            ProfileTab::Posts => 0,
            ProfileTab::Saved => 1,
        };
        let tabs_widget = Tabs::new(vec!["Posts", "Saved"])
            .select(selected_tab)
            .style(palette.muted())
            .highlight_style(palette.selected());
        frame.render_widget(tabs_widget, tabs);

        let mut lines: Vec<Line> = Vec::new();
        for row_start in (0..self.grid_len()).step_by(3) {
            let mut spans = Vec::new();
            for index in row_start..(row_start + 3).min(self.grid_len()) {
                let (likes, comments) = grid_overlay_counts(index);
                let style = if index == self.cursor {
                    palette.selected()
                } else {
                    palette.base()
                };
                spans.push(Span::styled(
                    format!(" [♥{likes:>4} 💬{comments:>3}] "),
                    style,
                ));
            }
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }
        frame.render_widget(Paragraph::new(lines).style(palette.base()), grid);
    }
}
