//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the middleware pipeline every outbound call goes through,
//! `middleware` holds the credential stages, `transport` is the browser
//! backend, `api` wraps the auth endpoints, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod middleware;
pub mod transport;
pub mod types;
