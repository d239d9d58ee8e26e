//! Route metadata and the pre-transition guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` describes which paths need a credential, `guard` decides each
//! transition, and `navigator` is the port the guard uses to issue redirects.

pub mod guard;
pub mod navigator;
pub mod routes;
