#![forbid(unsafe_code)]

//! Fallback for an unrecognized `--screen` route.

use instacam_core::View;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use super::Effect;
use crate::theme::Palette;

pub struct NotFoundScreen {
    route: String,
}

impl NotFoundScreen {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => Effect::Navigate(View::Home),
            _ => Effect::None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let lines = vec![
            Line::from("404"),
            Line::styled(format!("No screen named \"{}\".", self.route), palette.muted()),
            Line::styled("[Enter] go home", palette.accent()),
        ];
        let widget = Paragraph::new(lines)
            .centered()
            .block(Block::bordered().title(" Not found "));
        frame.render_widget(widget, area);
    }
}
