//! # Alice Core Library
//!
//! Headless session engine for the Alice Terminal chat client. It owns
//! the ordered entry log and the two timer-driven animators (spinner,
//! typewriter) that reveal agent replies, independent of any specific
//! user interface.
//!
//! ## Modules
//!
//! - `log`: ordered, keyed store of terminal entries
//! - `repeat`: timed-repeat primitive with a hard stop token
//! - `spinner` / `typewriter`: the two entry animators
//! - `session`: the turn state machine gating input and sequencing reveals
//! - `agent`: HTTP boundary to the remote conversational agent
//! - `render`: pluggable text-to-markup capability
//! - `settings`: application configuration
//! - `theme`: UI theming system

pub mod agent;
pub mod log;
pub mod render;
pub mod repeat;
pub mod session;
pub mod settings;
pub mod spinner;
pub mod theme;
pub mod typewriter;

pub use agent::{Agent, AgentError, AgentReply, HttpAgent};
pub use log::{Entry, EntryKey, EntryKind, EntryLog, SharedLog};
pub use render::{PlainText, Renderer};
pub use session::{SessionController, TurnPhase, CONNECT_ERROR, PROMPT, WELCOME};
pub use settings::Settings;
