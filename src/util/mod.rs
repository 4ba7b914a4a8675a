//! Cross-cutting helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `persist` centralizes localStorage write-through glue; `guard` wires the
//! pure route guard into page components.

pub mod guard;
pub mod persist;
