//! Functional core for HBnB.
//!
//! Pure domain types, validation rules and storage traits shared by the
//! server, the auth crate and the CLI client. Nothing in here performs I/O.

pub mod auth;
pub mod listing;
pub mod serde;
pub mod storage;
