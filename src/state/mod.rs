//! Per-card client state.
//!
//! DESIGN
//! ======
//! There is no shared store: each card owns its own fetch state, and the
//! only mutable record is the settings draft. Modules are split by domain
//! so components depend on small focused models.

pub mod settings;
pub mod setup;
