#![forbid(unsafe_code)]

//! Profile screen state: follow toggle, count formatting, content tabs.

/// The fixture profile being displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub name: String,
    pub bio: String,
    pub avatar: String,
    pub posts: u32,
    pub followers: u32,
    pub following: u32,
    pub is_verified: bool,
}

/// Which content tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Posts,
    Saved,
}

/// Profile screen state.
#[derive(Debug, Clone)]
pub struct ProfileState {
    pub profile: Profile,
    pub user_posts: Vec<String>,
    pub saved_posts: Vec<String>,
    following: bool,
    follower_count: u32,
    tab: ProfileTab,
}

impl ProfileState {
    pub fn new(profile: Profile, user_posts: Vec<String>, saved_posts: Vec<String>) -> Self {
        let follower_count = profile.followers;
        Self {
            profile,
            user_posts,
            saved_posts,
            following: false,
            follower_count,
            tab: ProfileTab::default(),
        }
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn follower_count(&self) -> u32 {
        self.follower_count
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    /// Toggle following; moves the follower count by exactly one and
    /// returns the toast text.
    pub fn toggle_follow(&mut self) -> &'static str {
        if self.following {
            self.follower_count -= 1;
            self.following = false;
            "Unfollowed user"
        } else {
            self.follower_count += 1;
            self.following = true;
            "Started following user"
        }
    }
}

/// Compact count formatting: 12500 -> "12.5K", 2300000 -> "2.3M".
pub fn format_count(n: u32) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Like/comment counts for the grid overlays, derived from the tile index
/// so they are stable across renders.
pub fn grid_overlay_counts(index: usize) -> (u32, u32) {
    let i = index as u32;
    (100 + (i * 271) % 900, 10 + (i * 53) % 90)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ProfileState {
        ProfileState::new(
            Profile {
                username: "john_photographer".into(),
                name: "John Smith".into(),
                bio: String::new(),
                avatar: String::new(),
                posts: 487,
                followers: 12_500,
                following: 892,
                is_verified: true,
            },
            vec!["a".into()],
            vec!["b".into()],
        )
    }

    #[test]
    fn follow_roundtrip_restores_count() {
        let mut p = state();
        assert_eq!(p.toggle_follow(), "Started following user");
        assert!(p.is_following());
        assert_eq!(p.follower_count(), 12_501);
        assert_eq!(p.toggle_follow(), "Unfollowed user");
        assert!(!p.is_following());
        assert_eq!(p.follower_count(), 12_500);
    }

    #[test]
    fn default_tab_is_posts() {
        let mut p = state();
        assert_eq!(p.tab(), ProfileTab::Posts);
        p.set_tab(ProfileTab::Saved);
        assert_eq!(p.tab(), ProfileTab::Saved);
    }

    #[test]
    fn count_formatting() {
        assert_eq!(format_count(487), "487");
        assert_eq!(format_count(12_500), "12.5K");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(2_300_000), "2.3M");
    }

    #[test]
    fn overlay_counts_are_stable() {
        assert_eq!(grid_overlay_counts(3), grid_overlay_counts(3));
    }
}
