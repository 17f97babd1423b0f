//! Shared types, utilities, and constants
//!
//! Common types, address helpers and constants used throughout the link core.

pub mod types;
pub mod utils;
pub mod constants;
pub mod error;

// Re-export shared components
pub use types::*;
pub use utils::*;
pub use error::*;
