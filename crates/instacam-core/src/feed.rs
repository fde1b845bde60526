#![forbid(unsafe_code)]

//! The home feed: posts with like/bookmark/comment-panel toggles.
//!
//! All mutations here are pure local flips with no cross-entity propagation.
//! Liking flips a boolean and moves the displayed counter by exactly one;
//! there is no server reconciliation and no failure path.

/// Author info attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUser {
    pub username: String,
    pub name: String,
    pub avatar: String,
}

/// A feed post plus its viewer-local toggle state.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u32,
    pub user: PostUser,
    pub image: String,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    pub timestamp: String,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub comments_open: bool,
}

/// A canned comment shown in the expanded comment panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub username: String,
    pub avatar: String,
    pub text: String,
    pub age: String,
}

/// Feed state: the post list plus the comment draft for the focused post.
#[derive(Debug, Clone)]
pub struct FeedState {
    posts: Vec<Post>,
    draft: String,
}

impl FeedState {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            draft: String::new(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: u32) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn post_mut(&mut self, id: u32) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// Toggle like: flip the flag, move the counter by exactly one.
    pub fn toggle_like(&mut self, id: u32) {
        if let Some(post) = self.post_mut(id) {
            if post.is_liked {
                post.likes -= 1;
            } else {
                post.likes += 1;
            }
            post.is_liked = !post.is_liked;
        }
    }

    /// The double-tap gesture: likes the post only when it is not yet liked.
    /// Returns `true` when a like happened (the caller shows the heart
    /// animation only then).
    pub fn double_tap_like(&mut self, id: u32) -> bool {
        match self.post(id) {
            Some(post) if !post.is_liked => {
                self.toggle_like(id);
                true
            }
            _ => false,
        }
    }

    /// Toggle bookmark; returns the toast text to show.
    pub fn toggle_bookmark(&mut self, id: u32) -> Option<&'static str> {
        let post = self.post_mut(id)?;
        post.is_bookmarked = !post.is_bookmarked;
        Some(if post.is_bookmarked {
            "Saved to bookmarks"
        } else {
            "Removed from bookmarks"
        })
    }

    pub fn toggle_comments(&mut self, id: u32) {
        if let Some(post) = self.post_mut(id) {
            post.comments_open = !post.comments_open;
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_push(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn draft_pop(&mut self) {
        self.draft.pop();
    }

    pub fn draft_clear(&mut self) {
        self.draft.clear();
    }

    /// Submit the comment draft. Only a non-empty (trimmed) draft posts;
    /// returns the toast text and clears the draft on success.
    pub fn submit_comment(&mut self) -> Option<&'static str> {
        if self.draft.trim().is_empty() {
            return None;
        }
        self.draft.clear();
        Some("Comment posted!")
    }
}
