//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (DOM attributes, cookies) and
//! rendering helpers from component logic.

pub mod markdown;
pub mod theme;
