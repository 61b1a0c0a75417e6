//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The only process-wide state is the authentication session; everything
//! else (forms, fetched lists) lives in the page that owns it.

pub mod session;
