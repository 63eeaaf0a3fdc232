//! State Management
//!
//! Page-local load state. There is no global store: each page owns its
//! signals and drops them on unmount.

pub mod load;

pub use load::{LoadState, RequestTracker};
