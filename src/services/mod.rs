//! Account services consumed by the form controller.
//!
//! ARCHITECTURE
//! ============
//! `account` defines the trait seam and its error type. `appwrite` is the
//! concrete HTTP adapter for the hosted backend; tests substitute mocks.

pub mod account;
pub mod appwrite;
