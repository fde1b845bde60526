#![forbid(unsafe_code)]

//! Full-screen story viewer overlay.
//!
//! Render-only: the playback state lives on the shell so the tick
//! subscription can reach it, and the shell handles the viewer's keys.

use instacam_core::StoryPlayback;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Gauge, Paragraph};

use crate::theme::Palette;

pub fn render(frame: &mut Frame, playback: &StoryPlayback, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(palette.base()), area);

    let [progress_row, header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    // One segment per story in the sequence: done, in-progress, or pending.
    let segments = Layout::horizontal(vec![Constraint::Ratio(1, playback.len() as u32); playback.len()])
        .spacing(1)
        .split(progress_row);
    for (i, segment) in segments.iter().enumerate() {
        let ratio = if i < playback.index() {
            1.0
        } else if i == playback.index() {
            f64::from(playback.progress_percent()) / 100.0
        } else {
            0.0
        };
        let gauge = Gauge::default()
            .gauge_style(palette.accent())
            .ratio(ratio.clamp(0.0, 1.0))
            .label("");
        frame.render_widget(gauge, *segment);
    }

    let story = playback.current();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(story.username.clone(), palette.title()),
            Span::styled(format!("  {}", story.timestamp), palette.muted()),
        ])),
        header,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("[photo] {}", story.image),
            palette.muted(),
        )))
        .centered(),
        body,
    );

    let heart = if playback.liked_by_viewer() { "♥" } else { "♡" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{heart} "), palette.accent()),
            Span::styled("[←] back  [→] next  [f] like  [Esc] close", palette.muted()),
        ])),
        footer,
    );
}
