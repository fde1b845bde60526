#![forbid(unsafe_code)]

//! Explore grid: search, trending terms, and load-more.
//!
//! The filter is deterministic tag matching, applied on every keystroke.
//! Non-empty queries raise a "Found N posts" toast; an empty query restores
//! the full grid without one.

/// One tile in the explore grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreEntry {
    pub id: u32,
    pub image: String,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<&'static str>,
}

/// How many entries a load-more appends.
pub const LOAD_MORE_COUNT: usize = 6;

/// Explore screen state.
#[derive(Debug, Clone)]
pub struct ExploreState {
    all: Vec<ExploreEntry>,
    filtered: Vec<ExploreEntry>,
    query: String,
    trending: &'static [&'static str],
}

impl ExploreState {
    pub fn new(entries: Vec<ExploreEntry>, trending: &'static [&'static str]) -> Self {
        Self {
            filtered: entries.clone(),
            all: entries,
            query: String::new(),
            trending,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entries(&self) -> &[ExploreEntry] {
        &self.filtered
    }

    pub fn trending(&self) -> &'static [&'static str] {
        self.trending
    }

    /// Apply a search query.
    ///
    /// Non-empty queries filter by tag match and return the toast text
    /// (`Found N posts for "query"`); an empty query restores the full grid
    /// and returns no toast.
    pub fn search(&mut self, query: &str) -> Option<String> {
        self.query = query.to_owned();
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.filtered = self.all.clone();
            return None;
        }
        let needle = trimmed.to_lowercase();
        self.filtered = self
            .all
            .iter()
            .filter(|e| e.tags.iter().any(|t| t.contains(needle.as_str())))
            .cloned()
            .collect();
        Some(format!(
            "Found {} posts for \"{}\"",
            self.filtered.len(),
            trimmed
        ))
    }

    /// Append one character to the query and re-filter.
    pub fn push_query_char(&mut self, c: char) -> Option<String> {
        let mut q = self.query.clone();
        q.push(c);
        self.search(&q)
    }

    /// Remove the last character and re-filter.
    pub fn pop_query_char(&mut self) -> Option<String> {
        let mut q = self.query.clone();
        q.pop();
        self.search(&q)
    }

    /// Append six more deterministic entries; returns the toast text.
    pub fn load_more(&mut self) -> &'static str {
        let base = self.filtered.len() as u32;
        for i in 0..LOAD_MORE_COUNT as u32 {
            let id = base + i + 1;
            self.filtered.push(ExploreEntry {
                id,
                image: format!("https://images.unsplash.com/photo-15{id:08}?w=400&h=400&fit=crop"),
                likes: 100 + (id * 137) % 2900,
                comments: 10 + (id * 31) % 190,
                tags: Vec::new(),
            });
        }
        "Loaded 6 more posts"
    }
}
