//! authform — sign-in / sign-up form flow for a hosted account backend.
//!
//! DESIGN
//! ======
//! The form controller owns one submission state machine per form instance
//! and talks to the backend only through the [`services::account::AccountService`]
//! trait. Connection parameters are loaded once at startup into an immutable
//! [`config::Config`] and shared by reference.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors stay local and block submission. Backend failures are
//! logged in full and collapsed into one generic user-facing message.
//! Missing configuration is fatal at startup.

pub mod config;
pub mod form;
pub mod services;
