//! Page-level components.

pub mod dashboard;
