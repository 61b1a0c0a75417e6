//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the shared request pipeline (auth injection, timeout, global
//! 401 policy), `api` exposes one typed function per endpoint, and `types`
//! defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
