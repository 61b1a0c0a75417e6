//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage,
//! geolocation, redirects) from page and component logic.

pub mod auth;
pub mod geo;
pub mod storage;
