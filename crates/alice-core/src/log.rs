//! Ordered, keyed log of terminal entries.
//!
//! The log is append-only: entries are never removed or reordered, only
//! replaced in place by key. Animators and the view share it through
//! [`SharedLog`], so every mutation is a short lock-then-swap with no
//! awaiting while the lock is held.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Stable identifier for one entry. Assigned when the entry is appended
/// and never reused; lookups for in-place update go by key, never by
/// position, since positions shift as the log grows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey(String);

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an entry is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Echo of a line the user submitted.
    Input,
    /// Placeholder being animated while a request is in flight.
    Spinner,
    /// Plain or markdown text.
    Text,
    /// Reference to a remote image.
    Image,
    /// Fixed error message for a failed turn.
    Error,
}

/// One line/block of terminal output or input.
#[derive(Debug, Clone)]
pub struct Entry {
    pub key: EntryKey,
    pub kind: EntryKind,
    pub content: String,
}

/// Insertion-ordered entry store with O(1) keyed replacement.
#[derive(Debug, Default)]
pub struct EntryLog {
    entries: Vec<Entry>,
    index: HashMap<EntryKey, usize>,
    next_id: u64,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the log and return its freshly
    /// minted key. Keys come from a monotonic counter, so two entries
    /// never collide for the life of the log.
    pub fn append(&mut self, kind: EntryKind, content: impl Into<String>) -> EntryKey {
        let key = EntryKey(format!("entry-{}", self.next_id));
        self.next_id += 1;
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Entry {
            key: key.clone(),
            kind,
            content: content.into(),
        });
        key
    }

    /// Swap an entry's kind and content in place. A missing key is a
    /// silent no-op: a replace must never fail, even if it arrives from
    /// an animator that outlived its entry.
    ///
    /// Once an entry has settled out of [`EntryKind::Spinner`] it never
    /// goes back; a late spinner tick against a settled entry is dropped.
    pub fn replace(&mut self, key: &EntryKey, kind: EntryKind, content: impl Into<String>) {
        let Some(&pos) = self.index.get(key) else {
            return;
        };
        let entry = &mut self.entries[pos];
        if kind == EntryKind::Spinner && entry.kind != EntryKind::Spinner {
            return;
        }
        entry.kind = kind;
        entry.content = content.into();
    }

    pub fn get(&self, key: &EntryKey) -> Option<&Entry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    /// Entries in insertion order, for rendering.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Handle shared between the session controller, the animators, and the
/// view.
pub type SharedLog = Arc<Mutex<EntryLog>>;

pub fn shared(log: EntryLog) -> SharedLog {
    Arc::new(Mutex::new(log))
}

/// Lock the shared log, recovering from a poisoned mutex. The log holds
/// plain data, so a panic mid-mutation cannot leave it in a state worth
/// refusing to read.
pub fn lock(log: &SharedLog) -> MutexGuard<'_, EntryLog> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order_and_mints_unique_keys() {
        let mut log = EntryLog::new();
        let a = log.append(EntryKind::Text, "first");
        let b = log.append(EntryKind::Input, "second");
        assert_ne!(a, b);
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].content, "first");
        assert_eq!(log.entries()[1].content, "second");
        assert_eq!(log.entries()[1].kind, EntryKind::Input);
    }

    #[test]
    fn replace_swaps_in_place_by_key() {
        let mut log = EntryLog::new();
        let first = log.append(EntryKind::Spinner, "|");
        log.append(EntryKind::Text, "later");
        log.replace(&first, EntryKind::Text, "hello");
        assert_eq!(log.entries()[0].content, "hello");
        assert_eq!(log.entries()[0].kind, EntryKind::Text);
        // Position of the other entry is untouched.
        assert_eq!(log.entries()[1].content, "later");
    }

    #[test]
    fn replace_with_absent_key_is_a_no_op() {
        let mut log = EntryLog::new();
        let key = log.append(EntryKind::Text, "kept");
        log.replace(&EntryKey("entry-99".into()), EntryKind::Error, "boom");
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(&key).map(|e| e.content.as_str()), Some("kept"));
    }

    #[test]
    fn settled_entry_never_reverts_to_spinner() {
        let mut log = EntryLog::new();
        let key = log.append(EntryKind::Spinner, "|");
        log.replace(&key, EntryKind::Text, "done");
        // A stray spinner tick that lost the race is dropped.
        log.replace(&key, EntryKind::Spinner, "/");
        let entry = log.get(&key).expect("entry exists");
        assert_eq!(entry.kind, EntryKind::Text);
        assert_eq!(entry.content, "done");
    }

    #[test]
    fn keys_are_not_reused_across_appends() {
        let mut log = EntryLog::new();
        let mut keys = Vec::new();
        for i in 0..10 {
            keys.push(log.append(EntryKind::Text, format!("line {i}")));
        }
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
