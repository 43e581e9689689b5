//! Terminal view: renders the entry log and forwards line submissions
//! to the session controller.

pub mod app;
mod chat;
mod footer;
mod header;
