//! Busy indicator cycled into a single log entry.

use crate::log::{self, EntryKey, EntryKind, SharedLog};
use crate::repeat::{self, RepeatHandle};
use std::time::Duration;

/// Glyphs cycled while a request is outstanding.
pub const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Spinner speed.
pub const PERIOD: Duration = Duration::from_millis(80);

/// A running spinner. Stopping releases the ticker; once `stop()`
/// returns, the entry will not be touched again by this spinner.
#[derive(Debug)]
pub struct SpinnerHandle {
    inner: RepeatHandle,
}

impl SpinnerHandle {
    /// Idempotent; stopping an already-stopped spinner is a no-op.
    pub fn stop(&self) {
        self.inner.stop();
    }
}

/// Start cycling [`FRAMES`] into the entry at `key`. The spinner holds
/// no state beyond its frame cursor and the ticker handle.
pub fn start(log: &SharedLog, key: &EntryKey) -> SpinnerHandle {
    let log = SharedLog::clone(log);
    let key = key.clone();
    let mut frame = 0usize;
    let inner = repeat::spawn(PERIOD, move || {
        let glyph = FRAMES[frame % FRAMES.len()];
        frame += 1;
        log::lock(&log).replace(&key, EntryKind::Spinner, glyph);
    });
    SpinnerHandle { inner }
}
