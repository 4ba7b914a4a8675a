//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the interceptor pipeline every call flows through, `api`
//! defines the typed endpoints, `types` the wire schema, and `error` the
//! failure taxonomy.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
