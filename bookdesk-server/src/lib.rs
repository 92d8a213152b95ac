//! Bookdesk Server Library
//!
//! A development stand-in for the remote book collection. It speaks the same
//! HTTP document-collection contract the client expects and exports its pieces
//! for testing and reuse.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;
