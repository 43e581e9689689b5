//! Session controller: the one turn-at-a-time state machine that owns
//! the entry log.
//!
//! A turn walks `Idle -> AwaitingResponse -> Animating -> Idle`. The
//! phase doubles as the busy flag and is the sole admission gate: a
//! submission while a turn is in flight is dropped, never queued. The
//! spinner is always stopped before the typewriter writes to the same
//! key, so the two animators never race on one entry.

use crate::agent::Agent;
use crate::log::{self, Entry, EntryKey, EntryKind, EntryLog, SharedLog};
use crate::render::Renderer;
use crate::{spinner, typewriter};
use std::sync::{Arc, Mutex, PoisonError};

/// Prompt shown while the session accepts input.
pub const PROMPT: &str = ">> ";

/// First entry of every session.
pub const WELCOME: &str = "Welcome to the Alice Terminal!";

/// Fixed message revealed when a request fails. Every failure mode of
/// the agent boundary collapses to this one line; the turn then ends
/// and the user may resubmit.
pub const CONNECT_ERROR: &str = "Error: Failed to connect to server";

/// Where the current turn is. `Idle` means input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    Idle,
    /// Request issued, spinner running, nothing received yet.
    AwaitingResponse,
    /// Replies (or the error line) are being revealed.
    Animating,
}

pub struct SessionController {
    log: SharedLog,
    agent: Arc<dyn Agent>,
    renderer: Arc<dyn Renderer>,
    phase: Mutex<TurnPhase>,
}

impl SessionController {
    /// Build a controller with the welcome entry already in the log.
    pub fn new(agent: Arc<dyn Agent>, renderer: Arc<dyn Renderer>) -> Self {
        let mut entries = EntryLog::new();
        entries.append(EntryKind::Text, WELCOME);
        Self {
            log: log::shared(entries),
            agent,
            renderer,
            phase: Mutex::new(TurnPhase::Idle),
        }
    }

    pub fn phase(&self) -> TurnPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn busy(&self) -> bool {
        self.phase() != TurnPhase::Idle
    }

    /// Empty while a turn is in flight; the view is expected to disable
    /// input entirely for an empty prompt.
    pub fn prompt(&self) -> &'static str {
        if self.busy() {
            ""
        } else {
            PROMPT
        }
    }

    /// Snapshot of the log in insertion order, for rendering.
    pub fn entries(&self) -> Vec<Entry> {
        log::lock(&self.log).entries().to_vec()
    }

    fn set_phase(&self, phase: TurnPhase) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = phase;
    }

    /// Claim the turn. Check and transition happen under one lock, so
    /// two racing submissions cannot both pass the gate.
    fn try_begin(&self) -> bool {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if *phase != TurnPhase::Idle {
            return false;
        }
        *phase = TurnPhase::AwaitingResponse;
        true
    }

    /// Run one full turn. Returns `false` when the command was rejected
    /// (blank input, or a turn already in flight) without touching the
    /// log. Resolves once the reply animation has finished and the
    /// session is idle again.
    pub async fn submit(&self, command: &str) -> bool {
        if command.trim().is_empty() {
            return false;
        }
        if !self.try_begin() {
            tracing::debug!("submission dropped, a turn is already in flight");
            return false;
        }

        // Echo the command, then reserve the response slot. The
        // placeholder starts on the first spinner frame.
        let key = {
            let mut entries = log::lock(&self.log);
            entries.append(EntryKind::Input, format!("{PROMPT}{command}"));
            entries.append(EntryKind::Spinner, spinner::FRAMES[0])
        };

        let busy = spinner::start(&self.log, &key);
        self.run_turn(command, &key, busy).await;
        self.set_phase(TurnPhase::Idle);
        true
    }

    async fn run_turn(&self, command: &str, key: &EntryKey, busy: spinner::SpinnerHandle) {
        match self.agent.send(command).await {
            Ok(replies) => {
                // Stop-before-start: the spinner must be done with the
                // key before the typewriter takes it over.
                busy.stop();
                self.set_phase(TurnPhase::Animating);

                if replies.is_empty() {
                    // An empty reply set is not an error; the
                    // placeholder settles as an empty text entry.
                    log::lock(&self.log).replace(key, EntryKind::Text, "");
                    tracing::debug!("turn complete, agent had nothing to say");
                    return;
                }

                // Strictly sequential: each message finishes revealing
                // before the next starts, each overwriting the same
                // entry.
                for reply in &replies {
                    let is_image = is_image_url(&reply.text);
                    typewriter::reveal(
                        &self.log,
                        key,
                        &reply.text,
                        is_image,
                        EntryKind::Text,
                        self.renderer.as_ref(),
                    )
                    .await;
                }
                tracing::debug!(messages = replies.len(), "turn complete");
            }
            Err(err) => {
                busy.stop();
                self.set_phase(TurnPhase::Animating);
                tracing::warn!(error = %err, "agent request failed");
                typewriter::reveal(
                    &self.log,
                    key,
                    CONNECT_ERROR,
                    false,
                    EntryKind::Error,
                    self.renderer.as_ref(),
                )
                .await;
            }
        }
    }
}

/// A reply is shown as an image when it is an http(s) URL whose path
/// ends in a known image extension, case-insensitive. Query strings and
/// fragments do not count as part of the path.
pub fn is_image_url(text: &str) -> bool {
    const EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".webp"];

    let lower = text.trim().to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return false;
    }
    let path = lower.split(['?', '#']).next().unwrap_or("");
    EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
