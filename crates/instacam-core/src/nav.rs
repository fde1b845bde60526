#![forbid(unsafe_code)]

//! Top-level view selection.
//!
//! One enumerated value says which screen the shell displays. Both
//! navigation surfaces (wide-layout sidebar, narrow-layout bottom bar) render
//! this single value; there is no second copy to drift out of sync.

/// The seven top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    Explore,
    Upload,
    Profile,
    Notifications,
    Messages,
    Settings,
}

impl View {
    /// All views in navigation order.
    pub const ALL: &'static [View] = &[
        View::Home,
        View::Explore,
        View::Upload,
        View::Profile,
        View::Notifications,
        View::Messages,
        View::Settings,
    ];

    /// The four views shown on the narrow-layout bottom bar.
    pub const PRIMARY: &'static [View] = &[View::Home, View::Explore, View::Upload, View::Profile];

    pub const fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Explore => "Explore",
            View::Upload => "Create",
            View::Profile => "Profile",
            View::Notifications => "Notifications",
            View::Messages => "Messages",
            View::Settings => "Settings",
        }
    }

    /// Route name as used by the `--screen` flag.
    pub const fn route(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Explore => "explore",
            View::Upload => "upload",
            View::Profile => "profile",
            View::Notifications => "notifications",
            View::Messages => "messages",
            View::Settings => "settings",
        }
    }

    /// Resolve a route name. Unknown names return `None`; the shell renders
    /// its not-found screen for those, standing in for a catch-all route.
    pub fn from_route(name: &str) -> Option<View> {
        View::ALL.iter().copied().find(|v| v.route() == name)
    }
}

/// The single source of truth for which view is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: View,
}

impl Selection {
    pub fn new(initial: View) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Select a view. Available from any view, no guards.
    ///
    /// Returns `true` when the selection actually changed, so the shell
    /// knows to rebuild the screen (revisited screens start from their
    /// default state).
    pub fn select(&mut self, view: View) -> bool {
        let changed = self.current != view;
        self.current = view;
        changed
    }

    /// Cycle to the next view in navigation order.
    pub fn next(&mut self) {
        let idx = View::ALL.iter().position(|v| *v == self.current).unwrap_or(0);
        self.current = View::ALL[(idx + 1) % View::ALL.len()];
    }

    /// Cycle to the previous view in navigation order.
    pub fn prev(&mut self) {
        let idx = View::ALL.iter().position(|v| *v == self.current).unwrap_or(0);
        self.current = View::ALL[(idx + View::ALL.len() - 1) % View::ALL.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_view_is_home() {
        assert_eq!(Selection::default().current(), View::Home);
    }

    #[test]
    fn select_reports_change() {
        let mut sel = Selection::default();
        assert!(sel.select(View::Explore));
        assert!(!sel.select(View::Explore));
        assert_eq!(sel.current(), View::Explore);
    }

    #[test]
    fn every_view_reachable_from_every_other() {
        for &from in View::ALL {
            for &to in View::ALL {
                let mut sel = Selection::new(from);
                sel.select(to);
                assert_eq!(sel.current(), to);
            }
        }
    }

    #[test]
    fn cycle_wraps_both_directions() {
        let mut sel = Selection::new(View::Settings);
        sel.next();
        assert_eq!(sel.current(), View::Home);
        sel.prev();
        assert_eq!(sel.current(), View::Settings);
    }

    #[test]
    fn routes_roundtrip() {
        for &view in View::ALL {
            assert_eq!(View::from_route(view.route()), Some(view));
        }
        assert_eq!(View::from_route("nonsense"), None);
    }

    fn arb_view() -> impl Strategy<Value = View> {
        prop::sample::select(View::ALL.to_vec())
    }

    proptest! {
        /// The current view always equals the most recently selected one.
        #[test]
        fn current_equals_last_selected(views in prop::collection::vec(arb_view(), 1..64)) {
            let mut sel = Selection::default();
            for &view in &views {
                sel.select(view);
            }
            prop_assert_eq!(sel.current(), *views.last().unwrap());
        }

        /// next() followed by prev() is the identity.
        #[test]
        fn next_prev_is_identity(start in arb_view()) {
            let mut sel = Selection::new(start);
            sel.next();
            sel.prev();
            prop_assert_eq!(sel.current(), start);
        }
    }
}
