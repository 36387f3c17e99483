//! RemoveBG web gateway
//!
//! Relays image uploads to the background removal backend and serves the
//! small JSON surface the web client needs.

#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(missing_docs, dead_code)]

/// Client for the external background removal backend
pub mod background_removal;

/// HTTP routes
pub mod routes;

/// HTTP server setup
pub mod server;

/// Configuration, errors and extractors
pub mod types;
