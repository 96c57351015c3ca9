//! Display-string helpers for Botpanel.
//!
//! This crate contains the pure formatting layer used by the panel UI:
//! bot status lines, greetings, and the running-count label.
//!
//! Zero infrastructure dependencies -- only serde.

pub mod greeting;
pub mod presence;

pub use greeting::greeting;
pub use presence::{Presence, format_active_count, format_bot_status};
