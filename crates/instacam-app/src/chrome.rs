#![forbid(unsafe_code)]

//! The navigation chrome around the active screen.
//!
//! Wide terminals get a sidebar listing every view; narrow ones get a
//! bottom bar with the four primary views. Both render the same
//! [`Selection`], so they can never disagree about what is active.

use instacam_core::toast::ToastQueue;
use instacam_core::{Selection, View};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::theme::Palette;

/// Below this width the sidebar is replaced by the bottom bar.
pub const SIDEBAR_MIN_WIDTH: u16 = 80;

/// Split the frame into chrome and content areas and draw the chrome.
/// Returns the content area the screen should render into.
pub fn render(frame: &mut Frame, selection: &Selection, palette: &Palette) -> Rect {
    let area = frame.area();
    if area.width >= SIDEBAR_MIN_WIDTH {
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(20), Constraint::Min(0)]).areas(area);
        render_sidebar(frame, sidebar, selection, palette);
        content
    } else {
        let [content, bar] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);
        render_bottom_bar(frame, bar, selection, palette);
        content
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, selection: &Selection, palette: &Palette) {
    let items: Vec<ListItem> = View::ALL
        .iter()
        .map(|&view| {
            let style = if view == selection.current() {
                palette.selected()
            } else {
                palette.base()
            };
            ListItem::new(Line::from(format!(" {}", view.label()))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::RIGHT)
            .title(Span::styled(" Instacam ", palette.title())),
    );
    frame.render_widget(list, area);
}

fn render_bottom_bar(frame: &mut Frame, area: Rect, selection: &Selection, palette: &Palette) {
    let spans: Vec<Span> = View::PRIMARY
        .iter()
        .flat_map(|&view| {
            let style = if view == selection.current() {
                palette.selected()
            } else {
                palette.muted()
            };
            [
                Span::styled(format!(" {} ", view.label()), style),
                Span::raw(" "),
            ]
        })
        .collect();

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::TOP))
        .centered();
    frame.render_widget(bar, area);
}

/// Draw live toasts stacked in the bottom-right corner, above everything.
pub fn render_toasts(frame: &mut Frame, toasts: &ToastQueue, palette: &Palette) {
    let area = frame.area();
    for (i, toast) in toasts.iter().enumerate() {
        let width = (toast.text.chars().count() as u16 + 4).min(area.width);
        let height = 3;
        let y_offset = (i as u16 + 1) * height;
        if y_offset + height > area.height {
            break;
        }
        let rect = Rect {
            x: area.width.saturating_sub(width + 1),
            y: area.height.saturating_sub(y_offset + 1),
            width,
            height,
        };
        let widget = Paragraph::new(toast.text.as_str())
            .style(palette.base())
            .block(Block::bordered().border_style(palette.accent()));
        frame.render_widget(Clear, rect);
        frame.render_widget(widget, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use instacam_core::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn toast_box_width_counts_characters_not_bytes() {
        let mut toasts = ToastQueue::new();
        // 12 columns on screen, 15 bytes in memory.
        toasts.push("enregistré ✓");
        let palette = Palette::for_theme(Theme::Light);

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| render_toasts(frame, &toasts, &palette))
            .unwrap();

        // Box is 12 + 4 wide, right-aligned with a one-cell margin.
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(23, 6)].symbol(), "┌");
        assert_eq!(buffer[(22, 6)].symbol(), " ");
    }
}
