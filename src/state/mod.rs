//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `models`, `chat`, `prompt`) and kept
//! as plain structs; components wrap each in an `RwSignal` provided via
//! context.

pub mod chat;
pub mod models;
pub mod prompt;
pub mod theme;
