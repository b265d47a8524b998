//! Networking modules for the chat backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests, `types` defines the wire schema, and `error` the
//! failure taxonomy every call resolves to.

pub mod api;
pub mod error;
pub mod types;
