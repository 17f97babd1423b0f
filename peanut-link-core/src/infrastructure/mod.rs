//! Infrastructure layer - configuration and logging
//!
//! Loading of the static chain tables and process settings, and logger setup.

pub mod config;
pub mod logger;

// Re-export infrastructure components
pub use self::config::*;
pub use logger::*;
