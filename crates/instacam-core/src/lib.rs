#![forbid(unsafe_code)]

//! Domain logic for Instacam, a mock photo-sharing app.
//!
//! Everything here is pure state: the auth gate, view selection, story
//! playback, the per-screen toggle state, and the fixture content they all
//! render from. No terminal or timer code lives in this crate; the runtime
//! drives these machines through plain method calls, which is also what
//! makes them directly testable.

pub mod explore;
pub mod feed;
pub mod fixtures;
pub mod messages;
pub mod nav;
pub mod profile;
pub mod session;
pub mod storage;
pub mod story;
pub mod theme;
pub mod toast;
pub mod upload;

pub use nav::{Selection, View};
pub use session::{AuthForm, Session};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};
pub use story::{Playback, Story, StoryPlayback};
pub use theme::Theme;
