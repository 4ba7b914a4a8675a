//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ui`, `admin`) so individual
//! components can depend on small focused models. The session store is the
//! only one with persistence semantics.

pub mod admin;
pub mod session;
pub mod ui;
