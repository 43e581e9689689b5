//! Character-by-character reveal of a reply into a log entry.

use crate::log::{self, EntryKey, EntryKind, SharedLog};
use crate::render::Renderer;
use std::time::Duration;

/// Typing speed.
pub const PERIOD: Duration = Duration::from_millis(20);

/// Reveal `full_text` into the entry at `key`, one character per tick,
/// rendering the accumulator through `renderer` on every step. The
/// future resolves once the final character has landed.
///
/// Images are not typed: when `is_image` is set, the entry becomes the
/// image reference in a single replace and the reveal completes
/// immediately. An empty `full_text` settles with exactly one replace of
/// the rendered empty string.
///
/// `kind` is the kind the entry settles to while text is revealed
/// (normally [`EntryKind::Text`], [`EntryKind::Error`] for the fixed
/// failure message).
///
/// Each call owns its own ticking; nothing is shared between reveals.
pub async fn reveal(
    log: &SharedLog,
    key: &EntryKey,
    full_text: &str,
    is_image: bool,
    kind: EntryKind,
    renderer: &dyn Renderer,
) {
    if is_image {
        log::lock(log).replace(key, EntryKind::Image, full_text);
        return;
    }

    if full_text.is_empty() {
        log::lock(log).replace(key, kind, renderer.render(""));
        return;
    }

    let mut shown = String::with_capacity(full_text.len());
    for ch in full_text.chars() {
        tokio::time::sleep(PERIOD).await;
        shown.push(ch);
        log::lock(log).replace(key, kind, renderer.render(&shown));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::EntryLog;
    use crate::render::PlainText;
    use std::sync::{Arc, Mutex};

    /// Renderer that records every accumulator it was handed.
    struct Recording(Arc<Mutex<Vec<String>>>);

    impl Renderer for Recording {
        fn render(&self, text: &str) -> String {
            self.0.lock().expect("render log").push(text.to_string());
            text.to_string()
        }
    }

    fn spinner_entry() -> (SharedLog, EntryKey) {
        let mut entries = EntryLog::new();
        let key = entries.append(EntryKind::Spinner, "|");
        (log::shared(entries), key)
    }

    #[tokio::test(start_paused = true)]
    async fn reveals_one_character_per_tick() {
        let (shared, key) = spinner_entry();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let renderer = Recording(Arc::clone(&calls));

        reveal(&shared, &key, "abc", false, EntryKind::Text, &renderer).await;

        assert_eq!(
            *calls.lock().expect("render log"),
            vec!["a".to_string(), "ab".to_string(), "abc".to_string()]
        );
        let entry = log::lock(&shared).get(&key).cloned().expect("entry");
        assert_eq!(entry.content, "abc");
        assert_eq!(entry.kind, EntryKind::Text);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_text_settles_with_a_single_render() {
        let (shared, key) = spinner_entry();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let renderer = Recording(Arc::clone(&calls));

        reveal(&shared, &key, "", false, EntryKind::Text, &renderer).await;

        assert_eq!(*calls.lock().expect("render log"), vec![String::new()]);
        let entry = log::lock(&shared).get(&key).cloned().expect("entry");
        assert_eq!(entry.kind, EntryKind::Text);
        assert_eq!(entry.content, "");
    }

    #[tokio::test(start_paused = true)]
    async fn image_replaces_immediately_without_typing() {
        let (shared, key) = spinner_entry();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let renderer = Recording(Arc::clone(&calls));

        let url = "https://x.com/a.png";
        reveal(&shared, &key, url, true, EntryKind::Text, &renderer).await;

        // The renderer is never consulted for images.
        assert!(calls.lock().expect("render log").is_empty());
        let entry = log::lock(&shared).get(&key).cloned().expect("entry");
        assert_eq!(entry.kind, EntryKind::Image);
        assert_eq!(entry.content, url);
    }

    #[tokio::test(start_paused = true)]
    async fn error_kind_is_carried_through_the_reveal() {
        let (shared, key) = spinner_entry();

        reveal(&shared, &key, "no", false, EntryKind::Error, &PlainText).await;

        let entry = log::lock(&shared).get(&key).cloned().expect("entry");
        assert_eq!(entry.kind, EntryKind::Error);
        assert_eq!(entry.content, "no");
    }
}
