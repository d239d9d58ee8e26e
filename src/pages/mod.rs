//! Page modules for the session routes.
//!
//! ARCHITECTURE
//! ============
//! Pages only collect input and render session state; every credential change
//! goes through the `SessionStore` on the provided `AuthContext`.

pub mod home;
pub mod login;
pub mod register;
