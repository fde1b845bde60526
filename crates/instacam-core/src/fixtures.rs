#![forbid(unsafe_code)]

//! Static fixture content standing in for a backend.
//!
//! Every screen renders from these arrays. They are rebuilt whenever a
//! screen is (re)entered, so viewer-local toggles reset on navigation.
//! Intentional for a mock UI.

use crate::explore::ExploreEntry;
use crate::feed::{Comment, Post, PostUser};
use crate::messages::{ChatMessage, Conversation};
use crate::profile::Profile;
use crate::story::Story;

fn unsplash(id: &str, w: u32, h: u32) -> String {
    format!("https://images.unsplash.com/photo-{id}?w={w}&h={h}&fit=crop")
}

fn face(id: &str) -> String {
    format!("https://images.unsplash.com/photo-{id}?w=150&h=150&fit=crop&crop=face")
}

/// The four feed posts.
pub fn posts() -> Vec<Post> {
    let make = |id: u32,
                username: &str,
                name: &str,
                avatar: &str,
                image: &str,
                caption: &str,
                likes: u32,
                comments: u32,
                timestamp: &str,
                is_liked: bool| Post {
        id,
        user: PostUser {
            username: username.into(),
            name: name.into(),
            avatar: face(avatar),
        },
        image: unsplash(image, 800, 800),
        caption: caption.into(),
        likes,
        comments,
        timestamp: timestamp.into(),
        is_liked,
        is_bookmarked: false,
        comments_open: false,
    };

    vec![
        make(
            1,
            "alex_wanderer",
            "Alex Johnson",
            "1535713875002-d1d0cf377fde",
            "1506905925346-21bda4d32df4",
            "Lost in the beauty of mountain peaks #adventure #nature #mountains",
            2847,
            124,
            "2 hours ago",
            false,
        ),
        make(
            2,
            "sarah_creates",
            "Sarah Chen",
            "1494790108755-2616b612b5bc",
            "1511593358241-7eea1f3c84e5",
            "Morning coffee and creativity. Starting the day right!",
            1923,
            87,
            "4 hours ago",
            true,
        ),
        make(
            3,
            "david_lens",
            "David Miller",
            "1472099645785-5658abf4ff4e",
            "1501594907352-04cda38ebc29",
            "Chasing sunsets and dreams. Life is beautiful when you stop to notice",
            3567,
            234,
            "6 hours ago",
            false,
        ),
        make(
            4,
            "maya_travels",
            "Maya Patel",
            "1438761681033-6461ffad8d80",
            "1519904981063-b0cf448d479e",
            "Street art speaks to the soul. Found this amazing mural in downtown!",
            1456,
            98,
            "8 hours ago",
            true,
        ),
    ]
}

/// The canned comments shown when a post's comment panel is open.
pub fn comments() -> Vec<Comment> {
    vec![
        Comment {
            username: "sarah_creates".into(),
            avatar: face("1494790108755-2616b612b5bc"),
            text: "Amazing shot!".into(),
            age: "2h".into(),
        },
        Comment {
            username: "david_lens".into(),
            avatar: face("1472099645785-5658abf4ff4e"),
            text: "This is incredible! What camera did you use?".into(),
            age: "1h".into(),
        },
    ]
}

/// The story bar entries, own entry first.
pub fn stories() -> Vec<Story> {
    let make = |id: u32,
                username: &str,
                avatar: &str,
                has_story: bool,
                is_own: bool,
                image: &str,
                timestamp: &str| Story {
        id,
        username: username.into(),
        avatar: face(avatar),
        image: if image.is_empty() {
            String::new()
        } else {
            unsplash(image, 400, 700)
        },
        timestamp: timestamp.into(),
        has_story,
        is_own,
    };

    vec![
        make(
            1,
            "Your Story",
            "1507003211169-0a1dd7228f2d",
            false,
            true,
            "",
            "",
        ),
        make(
            2,
            "alex_wanderer",
            "1535713875002-d1d0cf377fde",
            true,
            false,
            "1506905925346-21bda4d32df4",
            "2h ago",
        ),
        make(
            3,
            "sarah_creates",
            "1494790108755-2616b612b5bc",
            true,
            false,
            "1511593358241-7eea1f3c84e5",
            "4h ago",
        ),
        make(
            4,
            "david_lens",
            "1472099645785-5658abf4ff4e",
            true,
            false,
            "1501594907352-04cda38ebc29",
            "6h ago",
        ),
        make(
            5,
            "maya_travels",
            "1438761681033-6461ffad8d80",
            true,
            false,
            "1519904981063-b0cf448d479e",
            "8h ago",
        ),
        make(
            6,
            "jake_fitness",
            "1500648767791-00dcc994a43e",
            true,
            false,
            "1476514525535-07fb3b4ae5f1",
            "12h ago",
        ),
    ]
}

/// The nine explore grid tiles, tagged for deterministic search.
pub fn explore_entries() -> Vec<ExploreEntry> {
    let make = |id: u32, image: &str, likes: u32, comments: u32, tags: Vec<&'static str>| {
        ExploreEntry {
            id,
            image: unsplash(image, 400, 400),
            likes,
            comments,
            tags,
        }
    };

    vec![
        make(1, "1469474968028-56623f02e42e", 1243, 67, vec!["nature", "sunset"]),
        make(2, "1506905925346-21bda4d32df4", 2847, 124, vec!["nature", "travel"]),
        make(3, "1511593358241-7eea1f3c84e5", 1923, 87, vec!["food", "minimalism"]),
        make(4, "1501594907352-04cda38ebc29", 3567, 234, vec!["sunset", "travel"]),
        make(5, "1519904981063-b0cf448d479e", 1456, 98, vec!["urban art", "architecture"]),
        make(6, "1476514525535-07fb3b4ae5f1", 2134, 156, vec!["travel", "nature"]),
        make(7, "1502780402662-acc01917949e", 987, 43, vec!["fashion"]),
        make(8, "1518709268805-4e9042af2176", 1678, 89, vec!["architecture", "minimalism"]),
        make(9, "1490750967868-88aa4486c946", 3421, 267, vec!["nature photography", "nature"]),
    ]
}

/// Trending search terms.
pub const TRENDING_SEARCHES: &[&str] = &[
    "nature photography",
    "urban art",
    "travel",
    "food",
    "fashion",
    "architecture",
    "sunset",
    "minimalism",
];

/// Kinds of notification entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Like,
    Follow,
    Comment,
    Mention,
}

/// A (display-only) notification entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub username: String,
    pub avatar: String,
    pub post_image: Option<String>,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Like,
            username: "alex_wanderer".into(),
            avatar: face("1535713875002-d1d0cf377fde"),
            post_image: Some(unsplash("1506905925346-21bda4d32df4", 80, 80)),
            message: "liked your photo.".into(),
            timestamp: "2h ago".into(),
            read: false,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Follow,
            username: "sarah_creates".into(),
            avatar: face("1494790108755-2616b612b5bc"),
            post_image: None,
            message: "started following you.".into(),
            timestamp: "4h ago".into(),
            read: false,
        },
        Notification {
            id: 3,
            kind: NotificationKind::Comment,
            username: "david_lens".into(),
            avatar: face("1472099645785-5658abf4ff4e"),
            post_image: Some(unsplash("1501594907352-04cda38ebc29", 80, 80)),
            message: "commented on your photo: \"Amazing shot!\"".into(),
            timestamp: "6h ago".into(),
            read: true,
        },
        Notification {
            id: 4,
            kind: NotificationKind::Mention,
            username: "maya_travels".into(),
            avatar: face("1438761681033-6461ffad8d80"),
            post_image: Some(unsplash("1519904981063-b0cf448d479e", 80, 80)),
            message: "mentioned you in their story.".into(),
            timestamp: "8h ago".into(),
            read: true,
        },
        Notification {
            id: 5,
            kind: NotificationKind::Like,
            username: "jake_fitness".into(),
            avatar: face("1500648767791-00dcc994a43e"),
            post_image: Some(unsplash("1476514525535-07fb3b4ae5f1", 80, 80)),
            message: "and 12 others liked your photo.".into(),
            timestamp: "12h ago".into(),
            read: true,
        },
    ]
}

pub fn conversations() -> Vec<Conversation> {
    let msg = |text: &str, from_me: bool, timestamp: &str| ChatMessage {
        text: text.into(),
        from_me,
        timestamp: timestamp.into(),
    };

    vec![
        Conversation {
            id: 1,
            username: "alex_wanderer".into(),
            avatar: face("1535713875002-d1d0cf377fde"),
            online: true,
            last_message: "That photo is incredible! Where did you take it?".into(),
            timestamp: "2m ago".into(),
            unread: 2,
            messages: vec![
                msg("Hey! How are you?", false, "10:30 AM"),
                msg("I'm doing great! Just posted a new photo.", true, "10:32 AM"),
                msg(
                    "That photo is incredible! Where did you take it?",
                    false,
                    "10:33 AM",
                ),
            ],
        },
        Conversation {
            id: 2,
            username: "sarah_creates".into(),
            avatar: face("1494790108755-2616b612b5bc"),
            online: false,
            last_message: "Thanks for the follow! Love your content".into(),
            timestamp: "1h ago".into(),
            unread: 0,
            messages: vec![
                msg("Hi! Thanks for following me!", false, "9:15 AM"),
                msg("No problem! Your content is amazing.", true, "9:20 AM"),
                msg("Thanks for the follow! Love your content", false, "9:22 AM"),
            ],
        },
        Conversation {
            id: 3,
            username: "david_lens".into(),
            avatar: face("1472099645785-5658abf4ff4e"),
            online: true,
            last_message: "Would love to collaborate on a project".into(),
            timestamp: "3h ago".into(),
            unread: 1,
            messages: vec![
                msg("Your photography style is amazing!", false, "7:45 AM"),
                msg("Thank you so much!", true, "8:00 AM"),
                msg("Would love to collaborate on a project", false, "8:15 AM"),
            ],
        },
    ]
}

pub fn profile() -> Profile {
    Profile {
        username: "john_photographer".into(),
        name: "John Smith".into(),
        bio: "Professional photographer\nTravel enthusiast\nCapturing moments that matter\nBased in San Francisco".into(),
        avatar: face("1507003211169-0a1dd7228f2d"),
        posts: 487,
        followers: 12_500,
        following: 892,
        is_verified: true,
    }
}

pub fn user_posts() -> Vec<String> {
    [
        "1506905925346-21bda4d32df4",
        "1511593358241-7eea1f3c84e5",
        "1501594907352-04cda38ebc29",
        "1519904981063-b0cf448d479e",
        "1476514525535-07fb3b4ae5f1",
        "1502780402662-acc01917949e",
        "1518709268805-4e9042af2176",
        "1490750967868-88aa4486c946",
        "1469474968028-56623f02e42e",
    ]
    .iter()
    .map(|id| unsplash(id, 400, 400))
    .collect()
}

pub fn saved_posts() -> Vec<String> {
    [
        "1469474968028-56623f02e42e",
        "1518709268805-4e9042af2176",
        "1490750967868-88aa4486c946",
        "1502780402662-acc01917949e",
    ]
    .iter()
    .map(|id| unsplash(id, 400, 400))
    .collect()
}

/// Sample images offered by the upload picker (the terminal stand-in for a
/// file dialog).
pub fn sample_uploads() -> Vec<(&'static str, String)> {
    vec![
        ("Mountains", unsplash("1506905925346-21bda4d32df4", 800, 800)),
        ("Coffee", unsplash("1511593358241-7eea1f3c84e5", 800, 800)),
        ("Sunset", unsplash("1501594907352-04cda38ebc29", 800, 800)),
        ("Mural", unsplash("1519904981063-b0cf448d479e", 800, 800)),
        ("Coast", unsplash("1476514525535-07fb3b4ae5f1", 800, 800)),
    ]
}
