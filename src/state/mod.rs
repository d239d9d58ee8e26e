//! Shared client-side session state.
//!
//! DESIGN
//! ======
//! `storage` is the persistent credential port, `events` the invalidation
//! channel, and `session` the reactive store that owns login/logout.

pub mod events;
pub mod session;
pub mod storage;
