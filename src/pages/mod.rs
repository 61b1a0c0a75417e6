//! Screen components, one per route.

pub mod community;
pub mod dashboard;
pub mod emergency_contacts;
pub mod home;
pub mod location;
pub mod login;
pub mod maternity;
pub mod period_tracker;
pub mod profile;
pub mod register;
