//! Reusable UI components shared across pages.

pub mod navbar;
pub mod sos_button;
