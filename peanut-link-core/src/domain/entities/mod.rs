pub mod token;
pub mod network;
pub mod link;

// Re-export entities
pub use token::*;
pub use network::*;
pub use link::*;
