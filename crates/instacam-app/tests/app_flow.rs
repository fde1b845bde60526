//! End-to-end flows through the shell model: auth, navigation, story
//! playback, upload sharing, toasts. The model is driven directly with
//! messages; rendering is exercised against a test backend.

use instacam_app::app::{App, Msg};
use instacam_app::screens::Screen;
use instacam_core::upload::UploadPhase;
use instacam_core::{MemoryStore, Theme, View};
use instacam_runtime::{Cmd, Model};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn app() -> App {
    App::new(Box::new(MemoryStore::new()), None)
}

fn press(app: &mut App, code: KeyCode) -> Cmd<Msg> {
    app.update(Msg::Term(Event::Key(KeyEvent::new(
        code,
        KeyModifiers::NONE,
    ))))
}

fn sign_in(app: &mut App) {
    // Focus starts on the email field; Enter submits the form.
    press(app, KeyCode::Enter);
    assert!(app.session().is_authenticated());
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn starts_anonymous_and_sign_in_lands_on_home() {
    let mut app = app();
    assert!(!app.session().is_authenticated());

    sign_in(&mut app);
    assert_eq!(app.selection().current(), View::Home);
    assert!(matches!(app.screen(), Screen::Feed(_)));
}

#[test]
fn persisted_marker_skips_the_auth_gate() {
    use instacam_core::KeyValueStore;
    use instacam_core::storage::KEY_AUTHENTICATED;

    let mut store = MemoryStore::new();
    store.set(KEY_AUTHENTICATED, "true").unwrap();
    let app = App::new(Box::new(store), None);
    assert!(app.session().is_authenticated());
}

#[test]
fn digit_keys_navigate_and_rebuild_screens() {
    let mut app = app();
    sign_in(&mut app);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.selection().current(), View::Explore);
    assert!(matches!(app.screen(), Screen::Explore(_)));

    press(&mut app, KeyCode::Char('6'));
    assert_eq!(app.selection().current(), View::Messages);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.selection().current(), View::Home);
}

#[test]
fn revisiting_a_screen_resets_its_state() {
    let mut app = app();
    sign_in(&mut app);

    // Like the first post, leave, and come back: the like is gone.
    press(&mut app, KeyCode::Char('l'));
    if let Screen::Feed(feed) = app.screen() {
        assert!(feed.feed().posts()[0].is_liked);
    } else {
        panic!("expected feed screen");
    }

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('1'));
    if let Screen::Feed(feed) = app.screen() {
        assert!(!feed.feed().posts()[0].is_liked);
        assert_eq!(feed.feed().posts()[0].likes, 2847);
    } else {
        panic!("expected feed screen");
    }
}

#[test]
fn story_opens_ticks_and_auto_advances() {
    let mut app = app();
    sign_in(&mut app);

    // Move off the own-story entry and open.
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    let playback = app.story().expect("story viewer open");
    assert_eq!(playback.index(), 0);
    let epoch = playback.timer_epoch();

    // While open there is a tick subscription.
    assert_eq!(app.subscriptions().len(), 1);

    for _ in 0..50 {
        app.update(Msg::StoryTick { epoch });
    }
    let playback = app.story().expect("still open on second story");
    assert_eq!(playback.index(), 1);
    assert_eq!(playback.progress_percent(), 0.0);

    // Stale ticks from the torn-down timer are discarded.
    for _ in 0..10 {
        app.update(Msg::StoryTick { epoch });
    }
    assert_eq!(app.story().unwrap().progress_percent(), 0.0);
}

#[test]
fn story_runs_to_completion_and_closes() {
    let mut app = app();
    sign_in(&mut app);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    // 5 viewable stories, 50 ticks each.
    for _ in 0..5 * 50 {
        let epoch = match app.story() {
            Some(playback) => playback.timer_epoch(),
            None => panic!("closed early"),
        };
        app.update(Msg::StoryTick { epoch });
    }
    assert!(app.story().is_none());
    assert!(app.subscriptions().is_empty());
}

#[test]
fn story_keys_navigate_and_close() {
    let mut app = app();
    sign_in(&mut app);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.story().unwrap().index(), 1);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.story().unwrap().index(), 0);
    // Back at the first story is a no-op.
    press(&mut app, KeyCode::Left);
    assert_eq!(app.story().unwrap().index(), 0);

    press(&mut app, KeyCode::Esc);
    assert!(app.story().is_none());
}

#[test]
fn own_story_entry_does_not_open() {
    let mut app = app();
    sign_in(&mut app);
    // Cursor starts on "Your Story", which has no content.
    press(&mut app, KeyCode::Enter);
    assert!(app.story().is_none());
}

#[test]
fn bookmark_toast_appears_and_expires() {
    let mut app = app();
    sign_in(&mut app);

    press(&mut app, KeyCode::Char('b'));
    assert!(!app.toasts().is_empty());
    assert_eq!(app.subscriptions().len(), 1);

    for _ in 0..instacam_core::toast::TOAST_TTL_TICKS {
        app.update(Msg::ToastTick);
    }
    assert!(app.toasts().is_empty());
    assert!(app.subscriptions().is_empty());
}

#[test]
fn upload_share_completes_after_delay_message() {
    let mut app = app();
    sign_in(&mut app);
    press(&mut app, KeyCode::Char('3'));

    // Pick the first sample image, then share.
    press(&mut app, KeyCode::Enter);
    if let Screen::Upload(upload) = app.screen() {
        assert_eq!(*upload.editor().phase(), UploadPhase::Editing);
    } else {
        panic!("expected upload screen");
    }

    let cmd = press(&mut app, KeyCode::Enter);
    assert!(matches!(cmd, Cmd::Task(_)), "share should schedule the delay");
    if let Screen::Upload(upload) = app.screen() {
        assert!(upload.editor().is_sharing());
    } else {
        panic!("expected upload screen");
    }

    // A second Enter while sharing does nothing.
    let cmd = press(&mut app, KeyCode::Enter);
    assert!(matches!(cmd, Cmd::None));

    app.update(Msg::ShareComplete);
    if let Screen::Upload(upload) = app.screen() {
        assert_eq!(*upload.editor().phase(), UploadPhase::Idle);
    } else {
        panic!("expected upload screen");
    }
    assert!(!app.toasts().is_empty());
}

#[test]
fn settings_toggles_theme_and_signs_out() {
    let mut app = app();
    sign_in(&mut app);
    press(&mut app, KeyCode::Char('7'));

    assert_eq!(app.theme(), Theme::Light);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.theme(), Theme::Dark);

    // Sign out is the last row.
    for _ in 0..4 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    assert!(!app.session().is_authenticated());
}

#[test]
fn unknown_route_shows_not_found_and_recovers() {
    let mut app = App::new(Box::new(MemoryStore::new()), Some("bogus"));
    sign_in(&mut app);
    assert!(matches!(app.screen(), Screen::NotFound(_)));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selection().current(), View::Home);
    assert!(matches!(app.screen(), Screen::Feed(_)));
}

#[test]
fn known_route_starts_on_that_screen() {
    let mut app = App::new(Box::new(MemoryStore::new()), Some("messages"));
    sign_in(&mut app);
    assert_eq!(app.selection().current(), View::Messages);
}

#[test]
fn ctrl_c_quits_everywhere() {
    let mut app = app();
    let cmd = app.update(Msg::Term(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    ))));
    assert!(matches!(cmd, Cmd::Quit));
}

#[test]
fn renders_auth_and_every_view() {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut app = app();

    terminal.draw(|frame| app.view(frame)).unwrap();
    assert!(buffer_text(&terminal).contains("Sign in"));

    sign_in(&mut app);
    for (digit, needle) in [
        ('1', "Stories"),
        ('2', "Trending"),
        ('3', "pick a photo"),
        ('4', "john_photographer"),
        ('5', "Notifications"),
        ('6', "Messages"),
        ('7', "Settings"),
    ] {
        press(&mut app, KeyCode::Char(digit));
        terminal.draw(|frame| app.view(frame)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains(needle), "view {digit} missing {needle:?}");
        assert!(text.contains("Instacam"), "sidebar missing on view {digit}");
    }
}

#[test]
fn renders_story_overlay() {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut app = app();
    sign_in(&mut app);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    terminal.draw(|frame| app.view(frame)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("alex_wanderer"));
    assert!(text.contains("[Esc] close"));
}

#[test]
fn session_survives_a_restart_via_the_state_file() {
    use instacam_core::FileStore;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut app = App::new(Box::new(FileStore::open(&path)), None);
    sign_in(&mut app);
    press(&mut app, KeyCode::Char('7'));
    press(&mut app, KeyCode::Enter); // theme -> dark
    drop(app);

    let app = App::new(Box::new(FileStore::open(&path)), None);
    assert!(app.session().is_authenticated());
    assert_eq!(app.theme(), Theme::Dark);
}

#[test]
fn open_comment_panel_stays_in_view_on_the_last_post() {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    let mut app = app();
    sign_in(&mut app);

    // Last post, panel open: the draft line must still be on screen.
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Char('c'));
    terminal.draw(|frame| app.view(frame)).unwrap();
    assert!(buffer_text(&terminal).contains("Add a comment:"));
}

#[test]
fn narrow_layout_uses_bottom_bar() {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    let mut app = app();
    sign_in(&mut app);
    terminal.draw(|frame| app.view(frame)).unwrap();
    let text = buffer_text(&terminal);
    // The four primary views, no sidebar title.
    assert!(text.contains("Create"));
    assert!(!text.contains("Instacam"));
}

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// After any sequence of digit presses the selection matches the
        /// last digit, no matter which screens were visited in between.
        #[test]
        fn digit_navigation_tracks_the_last_press(digits in prop::collection::vec(1u8..=7, 1..32)) {
            let mut app = app();
            sign_in(&mut app);
            for d in &digits {
                press(&mut app, KeyCode::Char((b'0' + d) as char));
            }
            let expected = View::ALL[usize::from(digits.last().unwrap() - 1)];
            prop_assert_eq!(app.selection().current(), expected);
        }
    }
}
