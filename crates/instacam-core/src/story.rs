#![forbid(unsafe_code)]

//! Story playback: a timer-driven walk through a fixed story sequence.
//!
//! The viewer auto-advances on a 100 ms tick; each story runs for 5 s, so
//! every tick adds `100 / (5000 / 100) = 2.0` percent. Manual input reuses
//! the same transitions: a left-half tap steps back (no-op at index 0), a
//! right-half tap is the timer's advance performed immediately. There is one
//! authoritative advance transition; the timer and the input both call it.
//!
//! Closing (explicit, or advancing past the last story) is terminal. The
//! caller tears down the tick timer on every exit path and restarts it on
//! every index change; [`StoryPlayback::timer_epoch`] changes exactly when a
//! restart is required.

/// Tick interval for story progress, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;
/// How long a single story is shown, in milliseconds.
pub const STORY_DURATION_MS: u64 = 5000;
/// Progress added per tick, in percent.
pub const PROGRESS_PER_TICK: f32 = 100.0 / (STORY_DURATION_MS as f32 / TICK_INTERVAL_MS as f32);

/// One entry in a story sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: u32,
    pub username: String,
    pub avatar: String,
    pub image: String,
    pub timestamp: String,
    /// Whether this entry actually carries content.
    pub has_story: bool,
    /// Whether this is the viewer's own entry ("Your Story").
    pub is_own: bool,
}

/// Outcome of an advance or tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// The viewer is still showing a story.
    Showing,
    /// The viewer closed (advanced past the last story, or explicit close).
    Closed,
}

/// Active story-viewing session.
///
/// Invariant: `index < stories.len()` for as long as the session exists; the
/// session is destroyed (returning [`Playback::Closed`]) instead of ever
/// holding an out-of-range index.
#[derive(Debug, Clone)]
pub struct StoryPlayback {
    stories: Vec<Story>,
    index: usize,
    progress: f32,
    liked: bool,
    epoch: u64,
}

/// Filter a raw story list down to the viewable sequence: entries that have
/// content and are not the viewer's own.
pub fn viewable(stories: &[Story]) -> Vec<Story> {
    stories
        .iter()
        .filter(|s| s.has_story && !s.is_own)
        .cloned()
        .collect()
}

impl StoryPlayback {
    /// Open the viewer on the story with the given id.
    ///
    /// `stories` is the already-filtered viewable sequence. Returns `None`
    /// when the id is not in the sequence (e.g. the viewer's own entry).
    pub fn open(stories: Vec<Story>, story_id: u32) -> Option<Self> {
        let index = stories.iter().position(|s| s.id == story_id)?;
        tracing::debug!(story_id, index, total = stories.len(), "story viewer opened");
        Some(Self {
            stories,
            index,
            progress: 0.0,
            liked: false,
            epoch: 0,
        })
    }

    pub fn current(&self) -> &Story {
        &self.stories[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Progress through the current story, in percent (0..=100).
    pub fn progress_percent(&self) -> f32 {
        self.progress.min(100.0)
    }

    pub fn liked_by_viewer(&self) -> bool {
        self.liked
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    /// Changes whenever the tick timer must be restarted (i.e. on every
    /// index change). The shell derives the subscription id from this.
    pub fn timer_epoch(&self) -> u64 {
        self.epoch
    }

    fn enter_index(&mut self, index: usize) {
        self.index = index;
        self.progress = 0.0;
        self.liked = false;
        self.epoch += 1;
    }

    /// One timer tick: accumulate progress; advance once it reaches 100.
    pub fn tick(&mut self) -> Playback {
        self.progress += PROGRESS_PER_TICK;
        if self.progress >= 100.0 {
            self.advance()
        } else {
            Playback::Showing
        }
    }

    /// The single authoritative advance transition: next story, or close
    /// when there is none. Invoked by timer overflow and right-half input.
    pub fn advance(&mut self) -> Playback {
        if self.index + 1 < self.stories.len() {
            self.enter_index(self.index + 1);
            Playback::Showing
        } else {
            tracing::debug!("story viewer closed past last story");
            Playback::Closed
        }
    }

    /// Step back one story. At index 0 this is a no-op: the index stays put
    /// and progress is deliberately not reset.
    pub fn back(&mut self) {
        if self.index > 0 {
            self.enter_index(self.index - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn story(id: u32) -> Story {
        Story {
            id,
            username: format!("user_{id}"),
            avatar: String::new(),
            image: format!("img_{id}"),
            timestamp: "2h ago".into(),
            has_story: true,
            is_own: false,
        }
    }

    fn sequence(n: u32) -> Vec<Story> {
        (1..=n).map(story).collect()
    }

    #[test]
    fn viewable_drops_own_and_empty_entries() {
        let mut raw = sequence(3);
        raw[0].is_own = true;
        raw[1].has_story = false;
        let filtered = viewable(&raw);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn open_starts_at_tapped_story_with_zero_progress() {
        let pb = StoryPlayback::open(sequence(3), 2).unwrap();
        assert_eq!(pb.index(), 1);
        assert_eq!(pb.progress_percent(), 0.0);
        assert!(!pb.liked_by_viewer());
    }

    #[test]
    fn open_unknown_id_returns_none() {
        assert!(StoryPlayback::open(sequence(3), 99).is_none());
    }

    #[test]
    fn fifty_ticks_reach_full_progress_and_advance() {
        let mut pb = StoryPlayback::open(sequence(2), 1).unwrap();
        for _ in 0..49 {
            assert_eq!(pb.tick(), Playback::Showing);
            assert_eq!(pb.index(), 0);
        }
        // Tick 50 hits 100% and takes the advance transition.
        assert_eq!(pb.tick(), Playback::Showing);
        assert_eq!(pb.index(), 1);
        assert_eq!(pb.progress_percent(), 0.0);
    }

    #[test]
    fn single_story_closes_on_first_advance() {
        let mut pb = StoryPlayback::open(sequence(1), 1).unwrap();
        assert_eq!(pb.advance(), Playback::Closed);
    }

    #[test]
    fn sequence_of_n_closes_after_n_advances() {
        for n in 1..6 {
            let mut pb = StoryPlayback::open(sequence(n), 1).unwrap();
            for _ in 0..n - 1 {
                assert_eq!(pb.advance(), Playback::Showing);
            }
            assert_eq!(pb.advance(), Playback::Closed);
        }
    }

    #[test]
    fn back_at_zero_is_noop_and_preserves_progress() {
        let mut pb = StoryPlayback::open(sequence(3), 1).unwrap();
        pb.tick();
        let progress = pb.progress_percent();
        assert!(progress > 0.0);
        pb.back();
        assert_eq!(pb.index(), 0);
        assert_eq!(pb.progress_percent(), progress);
    }

    #[test]
    fn back_resets_progress_and_like() {
        let mut pb = StoryPlayback::open(sequence(3), 2).unwrap();
        pb.tick();
        pb.toggle_like();
        pb.back();
        assert_eq!(pb.index(), 0);
        assert_eq!(pb.progress_percent(), 0.0);
        assert!(!pb.liked_by_viewer());
    }

    #[test]
    fn advance_resets_progress_and_like() {
        let mut pb = StoryPlayback::open(sequence(3), 1).unwrap();
        pb.tick();
        pb.toggle_like();
        assert_eq!(pb.advance(), Playback::Showing);
        assert_eq!(pb.index(), 1);
        assert_eq!(pb.progress_percent(), 0.0);
        assert!(!pb.liked_by_viewer());
    }

    #[test]
    fn timer_epoch_changes_only_on_index_change() {
        let mut pb = StoryPlayback::open(sequence(3), 1).unwrap();
        let e0 = pb.timer_epoch();
        pb.tick();
        pb.toggle_like();
        assert_eq!(pb.timer_epoch(), e0);
        pb.advance();
        assert_ne!(pb.timer_epoch(), e0);
        let e1 = pb.timer_epoch();
        pb.back();
        assert_ne!(pb.timer_epoch(), e1);
    }

    proptest! {
        /// Auto-advancing only ever closes from the last index, and the
        /// index invariant holds throughout.
        #[test]
        fn ticks_never_break_index_invariant(n in 1u32..6, ticks in 0usize..400) {
            let mut pb = StoryPlayback::open(sequence(n), 1).unwrap();
            for _ in 0..ticks {
                prop_assert!(pb.index() < pb.len());
                if pb.tick() == Playback::Closed {
                    break;
                }
            }
        }

        /// A sequence of length n closes after exactly n * 50 ticks.
        #[test]
        fn full_autoplay_duration_is_fifty_ticks_per_story(n in 1u32..5) {
            let mut pb = StoryPlayback::open(sequence(n), 1).unwrap();
            let mut ticks = 0usize;
            loop {
                ticks += 1;
                if pb.tick() == Playback::Closed {
                    break;
                }
                prop_assert!(ticks < 10_000);
            }
            prop_assert_eq!(ticks, n as usize * 50);
        }
    }
}
