#![forbid(unsafe_code)]

//! Direct messages: conversation list, thread display, draft handling.
//!
//! Threads are fixture data; sending a message validates the draft and
//! clears it, but the thread itself never changes.

/// One message inside a conversation thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    /// `true` when the viewer sent it.
    pub from_me: bool,
    pub timestamp: String,
}

/// A conversation in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: u32,
    pub username: String,
    pub avatar: String,
    pub online: bool,
    pub last_message: String,
    pub timestamp: String,
    pub unread: u32,
    pub messages: Vec<ChatMessage>,
}

/// Messages screen state.
#[derive(Debug, Clone)]
pub struct MessagesState {
    conversations: Vec<Conversation>,
    selected: Option<u32>,
    draft: String,
}

impl MessagesState {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations,
            selected: None,
            draft: String::new(),
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn selected(&self) -> Option<&Conversation> {
        self.selected
            .and_then(|id| self.conversations.iter().find(|c| c.id == id))
    }

    pub fn select(&mut self, id: u32) {
        if self.conversations.iter().any(|c| c.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
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

    /// Send the draft: requires a selected conversation and non-empty
    /// trimmed text. Returns `true` when the draft was accepted (and
    /// cleared). The thread itself is fixture data and does not change.
    pub fn send(&mut self) -> bool {
        if self.selected.is_none() || self.draft.trim().is_empty() {
            return false;
        }
        self.draft.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv(id: u32) -> Conversation {
        Conversation {
            id,
            username: format!("user_{id}"),
            avatar: String::new(),
            online: false,
            last_message: String::new(),
            timestamp: "1h ago".into(),
            unread: 0,
            messages: vec![],
        }
    }

    #[test]
    fn starts_with_no_selection() {
        let state = MessagesState::new(vec![conv(1)]);
        assert!(state.selected().is_none());
    }

    #[test]
    fn select_and_deselect() {
        let mut state = MessagesState::new(vec![conv(1), conv(2)]);
        state.select(2);
        assert_eq!(state.selected().unwrap().id, 2);
        state.deselect();
        assert!(state.selected().is_none());
    }

    #[test]
    fn select_unknown_id_is_ignored() {
        let mut state = MessagesState::new(vec![conv(1)]);
        state.select(9);
        assert!(state.selected().is_none());
    }

    #[test]
    fn send_requires_selection_and_text() {
        let mut state = MessagesState::new(vec![conv(1)]);
        state.draft_push('h');
        assert!(!state.send(), "no conversation selected");

        state.select(1);
        assert!(state.send());
        assert!(state.draft().is_empty());

        assert!(!state.send(), "empty draft");
    }

    #[test]
    fn whitespace_draft_is_rejected() {
        let mut state = MessagesState::new(vec![conv(1)]);
        state.select(1);
        state.draft_push(' ');
        assert!(!state.send());
    }
}
