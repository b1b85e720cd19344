//! Navigation port: the browser history as an injected dependency.
//!
//! Controllers request navigation through [`Navigation::push`]. The other side,
//! [`Navigation::subscribe`], reports every location change, back and forward
//! included; `follow_navigation` feeds those to a `ListingController`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

pub trait Navigation {
    /// Push a new history entry whose query string is `query` (no leading `?`).
    fn push(&self, query: &str);

    /// Current query string, updated on every location change. The channel closes
    /// when the history goes away.
    fn subscribe(&self) -> watch::Receiver<String>;
}

/// In-process history stack with back/forward and change notification.
pub struct MemoryHistory {
    inner: Mutex<History>,
    location: watch::Sender<String>,
}

struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// Start with a single entry, the initial location.
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = strip_question_mark(initial.into());
        let (location, _) = watch::channel(initial.clone());
        Self {
            inner: Mutex::new(History {
                entries: vec![initial],
                cursor: 0,
            }),
            location,
        }
    }

    /// Current query string.
    pub fn location(&self) -> String {
        self.location.borrow().clone()
    }

    /// Step back one entry. Returns false at the start of the history.
    pub fn back(&self) -> bool {
        let mut history = self.lock();
        if history.cursor == 0 {
            return false;
        }
        history.cursor -= 1;
        self.publish(&history);
        true
    }

    /// Step forward one entry. Returns false at the end of the history.
    pub fn forward(&self) -> bool {
        let mut history = self.lock();
        if history.cursor + 1 >= history.entries.len() {
            return false;
        }
        history.cursor += 1;
        self.publish(&history);
        true
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, History> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, history: &History) {
        let current = history.entries[history.cursor].clone();
        tracing::debug!(location = %current, "history moved");
        self.location.send_replace(current);
    }
}

impl Navigation for MemoryHistory {
    fn push(&self, query: &str) {
        let query = strip_question_mark(query.to_string());
        let mut history = self.lock();
        let keep = history.cursor + 1;
        history.entries.truncate(keep);
        history.entries.push(query);
        history.cursor = keep;
        tracing::info!(location = %history.entries[keep], "navigation pushed");
        self.publish(&history);
    }

    fn subscribe(&self) -> watch::Receiver<String> {
        self.location.subscribe()
    }
}

fn strip_question_mark(query: String) -> String {
    match query.strip_prefix('?') {
        Some(rest) => rest.to_string(),
        None => query,
    }
}
