#![forbid(unsafe_code)]

//! The top-level model: auth gate, view selection, story overlay, toasts.
//!
//! Startup injects the persisted session and theme once; after that every
//! state change flows through `update`. Screens are rebuilt whenever the
//! selection changes, so a revisited screen starts from its default state.

use std::time::Duration;

use instacam_core::story::{self, TICK_INTERVAL_MS};
use instacam_core::toast::ToastQueue;
use instacam_core::{
    AuthForm, KeyValueStore, Playback, Selection, Session, StoryPlayback, Theme, View, fixtures,
    upload,
};
use instacam_runtime::{Cmd, Every, Model, SubId, Subscription};
use ratatui::Frame;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::Block;

use crate::chrome;
use crate::screens::auth::{AuthAction, AuthScreen};
use crate::screens::{Effect, Screen, story_viewer};
use crate::theme::Palette;

/// Subscription id for the toast aging tick.
const TOAST_SUB_ID: SubId = 1;
/// Story tick ids live above this bit so they never collide with the toast
/// tick; the low bits carry the playback epoch.
const STORY_SUB_BASE: SubId = 1 << 32;

#[derive(Debug)]
pub enum Msg {
    Term(Event),
    /// Ages the toast queue.
    ToastTick,
    /// Story progress tick, tagged with the epoch it was started for so a
    /// tick from a torn-down timer is discarded.
    StoryTick { epoch: u64 },
    /// The simulated upload delay elapsed.
    ShareComplete,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Msg::Term(event)
    }
}

pub struct App {
    store: Box<dyn KeyValueStore>,
    session: Session,
    theme: Theme,
    palette: Palette,
    selection: Selection,
    screen: Screen,
    auth: AuthScreen,
    story: Option<StoryPlayback>,
    toasts: ToastQueue,
}

impl App {
    /// Build the app from an opened store and an optional `--screen` route.
    pub fn new(store: Box<dyn KeyValueStore>, route: Option<&str>) -> Self {
        let session = Session::load(store.as_ref());
        let theme = Theme::load(store.as_ref());

        let (selection, screen) = match route {
            Some(name) => match View::from_route(name) {
                Some(view) => (Selection::new(view), Screen::build(view)),
                None => {
                    tracing::warn!(route = name, "unknown screen route");
                    (Selection::default(), Screen::not_found(name))
                }
            },
            None => (Selection::default(), Screen::build(View::Home)),
        };

        Self {
            store,
            session,
            theme,
            palette: Palette::for_theme(theme),
            selection,
            screen,
            auth: AuthScreen::new(),
            story: None,
            toasts: ToastQueue::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn story(&self) -> Option<&StoryPlayback> {
        self.story.as_ref()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    fn navigate(&mut self, view: View) {
        // The not-found screen is not tied to any view, so leaving it always
        // rebuilds even when the selection itself did not move.
        let leaving_not_found = matches!(self.screen, Screen::NotFound(_));
        if self.selection.select(view) || leaving_not_found {
            tracing::debug!(view = view.route(), "navigate");
            self.screen = Screen::build(view);
        }
    }

    fn apply(&mut self, effect: Effect) -> Cmd<Msg> {
        match effect {
            Effect::None => Cmd::None,
            Effect::Toast(text) => {
                self.toasts.push(text);
                Cmd::None
            }
            Effect::Navigate(view) => {
                self.navigate(view);
                Cmd::None
            }
            Effect::OpenStory(id) => {
                let sequence = story::viewable(&fixtures::stories());
                if let Some(playback) = StoryPlayback::open(sequence, id) {
                    self.story = Some(playback);
                }
                Cmd::None
            }
            Effect::BeginShare => Cmd::task(|| {
                std::thread::sleep(Duration::from_millis(upload::SHARE_DELAY_MS));
                Msg::ShareComplete
            }),
            Effect::ToggleTheme => {
                if let Err(e) = self.theme.toggle(self.store.as_mut()) {
                    tracing::error!(error = %e, "failed to persist theme");
                }
                self.palette = Palette::for_theme(self.theme);
                Cmd::None
            }
            Effect::SignOut => {
                if let Err(e) = self.session.sign_out(self.store.as_mut()) {
                    tracing::error!(error = %e, "failed to clear session marker");
                }
                self.auth = AuthScreen::new();
                self.selection = Selection::default();
                self.screen = Screen::build(View::Home);
                self.story = None;
                Cmd::None
            }
        }
    }

    fn on_story_key(&mut self, key: KeyEvent) {
        let Some(playback) = &mut self.story else {
            return;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => self.story = None,
            KeyCode::Right | KeyCode::Char(' ') => {
                if playback.advance() == Playback::Closed {
                    self.story = None;
                }
            }
            KeyCode::Left => playback.back(),
            KeyCode::Char('f') => playback.toggle_like(),
            _ => {}
        }
    }

    fn on_auth_key(&mut self, key: KeyEvent) {
        let Session::Anonymous { showing } = self.session else {
            return;
        };
        match self.auth.handle_key(key, showing) {
            AuthAction::None => {}
            AuthAction::SwitchForm => match showing {
                AuthForm::SignIn => self.session.switch_to_sign_up(),
                AuthForm::SignUp => self.session.switch_to_sign_in(),
            },
            AuthAction::Submit => {
                let result = match showing {
                    AuthForm::SignIn => self.session.submit_sign_in(self.store.as_mut()),
                    AuthForm::SignUp => self.session.submit_sign_up(self.store.as_mut()),
                };
                if let Err(e) = result {
                    tracing::error!(error = %e, "failed to persist session marker");
                }
                // The selection keeps whatever the startup route set; the
                // screen behind the gate is already freshly built.
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Cmd::Quit;
        }

        if self.story.is_some() {
            self.on_story_key(key);
            return Cmd::None;
        }

        if !self.session.is_authenticated() {
            self.on_auth_key(key);
            return Cmd::None;
        }

        if !self.screen.wants_text_input() {
            match key.code {
                KeyCode::Char('q') => return Cmd::Quit,
                KeyCode::Char(c @ '1'..='7') => {
                    let index = (c as u8 - b'1') as usize;
                    self.navigate(View::ALL[index]);
                    return Cmd::None;
                }
                _ => {}
            }
        }

        let effect = self.screen.handle_key(key);
        self.apply(effect)
    }
}

impl Model for App {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Term(Event::Key(key)) if key.kind == KeyEventKind::Press => self.on_key(key),
            Msg::Term(_) => Cmd::None,
            Msg::ToastTick => {
                self.toasts.tick();
                Cmd::None
            }
            Msg::StoryTick { epoch } => {
                if let Some(playback) = &mut self.story
                    && playback.timer_epoch() == epoch
                    && playback.tick() == Playback::Closed
                {
                    self.story = None;
                }
                Cmd::None
            }
            Msg::ShareComplete => {
                if let Screen::Upload(upload) = &mut self.screen
                    && upload.editor().is_sharing()
                {
                    let toast = upload.editor_mut().finish_share();
                    self.toasts.push(toast);
                }
                Cmd::None
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        frame.render_widget(Block::default().style(self.palette.base()), frame.area());

        if let Session::Anonymous { showing } = self.session {
            self.auth.render(frame, frame.area(), &self.palette, showing);
        } else {
            let content = chrome::render(frame, &self.selection, &self.palette);
            self.screen.render(frame, content, &self.palette, self.theme);
            if let Some(playback) = &self.story {
                story_viewer::render(frame, playback, &self.palette);
            }
        }

        chrome::render_toasts(frame, &self.toasts, &self.palette);
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
        let mut subs: Vec<Box<dyn Subscription<Msg>>> = Vec::new();
        if !self.toasts.is_empty() {
            subs.push(Box::new(Every::with_id(
                TOAST_SUB_ID,
                Duration::from_millis(100),
                || Msg::ToastTick,
            )));
        }
        if let Some(playback) = &self.story {
            let epoch = playback.timer_epoch();
            subs.push(Box::new(Every::with_id(
                STORY_SUB_BASE | epoch,
                Duration::from_millis(TICK_INTERVAL_MS),
                move || Msg::StoryTick { epoch },
            )));
        }
        subs
    }
}
