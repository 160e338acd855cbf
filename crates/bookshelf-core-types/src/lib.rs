//! Core types shared across Bookshelf facilities
//!
//! Canonical field keys and event names used by both the error facility
//! and the structured logging macros.

pub mod schema;
