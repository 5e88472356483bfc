//! Network layer: API response types, endpoint helpers, and the
//! cancellable keyed-fetch lifecycle shared by every dashboard card.

pub mod api;
pub mod fetch;
pub mod types;
