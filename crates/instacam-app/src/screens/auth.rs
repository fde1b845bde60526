#![forbid(unsafe_code)]

//! Sign-in and sign-up forms shown while the session is anonymous.
//!
//! Credentials are captured but never validated; submitting either form
//! authenticates immediately. The last focusable row is the link that
//! switches between the two forms.

use instacam_core::AuthForm;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::theme::Palette;

/// What a key press on the auth screen asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    None,
    /// Submit the visible form.
    Submit,
    /// Switch between sign-in and sign-up.
    SwitchForm,
}

#[derive(Default)]
pub struct AuthScreen {
    username: String,
    email: String,
    password: String,
    focus: usize,
}

impl AuthScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field labels for the form, the switch link last.
    fn rows(form: AuthForm) -> &'static [&'static str] {
        match form {
            AuthForm::SignIn => &["Email", "Password", "Don't have an account? Sign up"],
            AuthForm::SignUp => &[
                "Username",
                "Email",
                "Password",
                "Already have an account? Sign in",
            ],
        }
    }

    fn field_mut(&mut self, form: AuthForm) -> Option<&mut String> {
        match (form, self.focus) {
            (AuthForm::SignIn, 0) => Some(&mut self.email),
            (AuthForm::SignIn, 1) => Some(&mut self.password),
            (AuthForm::SignUp, 0) => Some(&mut self.username),
            (AuthForm::SignUp, 1) => Some(&mut self.email),
            (AuthForm::SignUp, 2) => Some(&mut self.password),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, form: AuthForm) -> AuthAction {
        let rows = Self::rows(form);
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % rows.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + rows.len() - 1) % rows.len();
            }
            KeyCode::Enter => {
                if self.focus == rows.len() - 1 {
                    self.focus = 0;
                    return AuthAction::SwitchForm;
                }
                return AuthAction::Submit;
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.field_mut(form) {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.field_mut(form) {
                    field.pop();
                }
            }
            _ => {}
        }
        AuthAction::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, form: AuthForm) {
        let [card] = Layout::horizontal([Constraint::Length(48)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::vertical([Constraint::Length(12)])
            .flex(Flex::Center)
            .areas(card);

        let title = match form {
            AuthForm::SignIn => " Instacam - Sign in ",
            AuthForm::SignUp => " Instacam - Sign up ",
        };

        let rows = Self::rows(form);
        let mut lines = vec![Line::default()];
        for (i, label) in rows.iter().enumerate() {
            let focused = i == self.focus;
            let style = if focused {
                palette.selected()
            } else {
                palette.muted()
            };
            if i == rows.len() - 1 {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(*label, style)));
                continue;
            }
            let value = match (form, i) {
                (AuthForm::SignIn, 0) => self.email.as_str(),
                (AuthForm::SignIn, _) => self.password.as_str(),
                (AuthForm::SignUp, 0) => self.username.as_str(),
                (AuthForm::SignUp, 1) => self.email.as_str(),
                (AuthForm::SignUp, _) => self.password.as_str(),
            };
            let shown = if label.contains("Password") {
                "•".repeat(value.chars().count())
            } else {
                value.to_owned()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), style),
                Span::raw(shown),
                Span::styled(if focused { "▏" } else { "" }, palette.accent()),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "[Tab] next field  [Enter] submit",
            palette.muted(),
        )));

        let widget = Paragraph::new(lines)
            .style(palette.base())
            .block(Block::bordered().title(Span::styled(title, palette.title())));
        frame.render_widget(widget, card);
    }
}
