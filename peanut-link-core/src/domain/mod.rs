//! Domain layer - entities and repositories
//!
//! Tokens, chains and stored links, plus the traits through which local link
//! storage and the link SDK are reached.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
