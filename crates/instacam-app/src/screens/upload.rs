#![forbid(unsafe_code)]

//! Upload editor: sample picker, filter presets, adjustment sliders,
//! caption, and the simulated share.
//!
//! While the share is in flight every control is inert; the state machine
//! in the core crate enforces that, this screen only renders it.

use instacam_core::fixtures;
use instacam_core::upload::{FILTER_PRESETS, UploadEditor, UploadPhase};
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph};

use super::Effect;
use crate::theme::Palette;

const SLIDERS: &[&str] = &["Brightness", "Contrast", "Saturation"];
const SLIDER_STEP: i16 = 10;

pub struct UploadScreen {
    editor: UploadEditor,
    samples: Vec<(&'static str, String)>,
    picker_cursor: usize,
    slider: usize,
    caption_mode: bool,
}

impl UploadScreen {
    pub fn new() -> Self {
        Self {
            editor: UploadEditor::new(),
            samples: fixtures::sample_uploads(),
            picker_cursor: 0,
            slider: 0,
            caption_mode: false,
        }
    }

    pub fn editor(&self) -> &UploadEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut UploadEditor {
        &mut self.editor
    }

    pub fn wants_text_input(&self) -> bool {
        self.caption_mode
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        match self.editor.phase() {
            UploadPhase::Idle => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.picker_cursor = self.picker_cursor.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.picker_cursor + 1 < self.samples.len() {
                        self.picker_cursor += 1;
                    }
                }
                KeyCode::Enter => {
                    let image = self.samples[self.picker_cursor].1.clone();
                    self.editor.pick_image(image);
                }
                _ => {}
            },
            UploadPhase::Editing => {
                if self.caption_mode {
                    match key.code {
                        KeyCode::Char(c) => self.editor.caption_push(c),
                        KeyCode::Backspace => self.editor.caption_pop(),
                        KeyCode::Enter | KeyCode::Esc => self.caption_mode = false,
                        _ => {}
                    }
                    return Effect::None;
                }
                match key.code {
                    KeyCode::Char('e') => self.caption_mode = true,
                    KeyCode::Char('f') | KeyCode::Tab => self.editor.cycle_filter(),
                    KeyCode::Up | KeyCode::Char('k') => self.slider = self.slider.saturating_sub(1),
                    KeyCode::Down | KeyCode::Char('j') => {
                        if self.slider + 1 < SLIDERS.len() {
                            self.slider += 1;
                        }
                    }
                    KeyCode::Left | KeyCode::Right => {
                        let delta = if key.code == KeyCode::Left {
                            -SLIDER_STEP
                        } else {
                            SLIDER_STEP
                        };
                        if let Some(adj) = self.editor.adjustments_mut() {
                            match self.slider {
                                0 => adj.adjust_brightness(delta),
                                1 => adj.adjust_contrast(delta),
                                _ => adj.adjust_saturation(delta),
                            }
                        }
                    }
                    KeyCode::Enter => {
                        if self.editor.begin_share() {
                            return Effect::BeginShare;
                        }
                    }
                    KeyCode::Esc => self.editor.reset(),
                    _ => {}
                }
            }
            // All input is disabled until the share completes.
            UploadPhase::Sharing => {}
        }
        Effect::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        match self.editor.phase() {
            UploadPhase::Idle => self.render_picker(frame, area, palette),
            UploadPhase::Editing => self.render_editor(frame, area, palette),
            UploadPhase::Sharing => self.render_sharing(frame, area, palette),
        }
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let items: Vec<ListItem> = self
            .samples
            .iter()
            .enumerate()
            .map(|(i, (name, _))| {
                let style = if i == self.picker_cursor {
                    palette.selected()
                } else {
                    palette.base()
                };
                ListItem::new(format!(" {name}")).style(style)
            })
            .collect();
        let list = List::new(items).block(
            Block::bordered()
                .title(Span::styled(" Create new post - pick a photo ", palette.title())),
        );
        frame.render_widget(list, area);
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let [header, filters, sliders, caption, hints] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(9),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(area);

        let image = self.editor.image().unwrap_or_default();
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Editing ", palette.title()),
                Span::styled(image, palette.muted()),
            ])),
            header,
        );

        let mut filter_spans = Vec::new();
        for (i, preset) in FILTER_PRESETS.iter().enumerate() {
            let style = if i == self.editor.filter_index() {
                palette.selected()
            } else {
                palette.muted()
            };
            filter_spans.push(Span::styled(format!(" {} ", preset.name), style));
        }
        frame.render_widget(Paragraph::new(Line::from(filter_spans)), filters);

        let adj = self.editor.adjustments();
        let values = [adj.brightness, adj.contrast, adj.saturation];
        let rows = Layout::vertical([Constraint::Length(3); 3]).areas::<3>(sliders);
        for (i, (label, value)) in SLIDERS.iter().zip(values).enumerate() {
            let style = if i == self.slider {
                palette.accent()
            } else {
                palette.muted()
            };
            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::NONE).title(Span::styled(
                    format!("{label}: {value}"),
                    style,
                )))
                .gauge_style(style)
                .ratio(f64::from(value).min(200.0) / 200.0);
            frame.render_widget(gauge, rows[i]);
        }

        let caption_text = self.editor.caption();
        let caption_widget = Paragraph::new(Line::from(vec![
            Span::raw(caption_text.to_owned()),
            Span::styled(if self.caption_mode { "▏" } else { "" }, palette.accent()),
        ]))
        .block(Block::bordered().title(format!(
            " Caption ({}/{}) ",
            caption_text.chars().count(),
            instacam_core::upload::CAPTION_LIMIT
        )));
        frame.render_widget(caption_widget, caption);

        frame.render_widget(
            Paragraph::new("[f] filter  [↑↓] slider  [←→] adjust  [e] caption  [Enter] share  [Esc] discard")
                .style(palette.muted()),
            hints,
        );
    }

    fn render_sharing(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let widget = Paragraph::new("Sharing…")
            .style(palette.accent())
            .centered()
            .block(Block::bordered().title(" Create new post "));
        frame.render_widget(widget, area);
    }
}
