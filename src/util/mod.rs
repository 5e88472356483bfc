//! Cross-cutting helpers: display formatting and the injected browser
//! capability.

pub mod browser;
pub mod format;
