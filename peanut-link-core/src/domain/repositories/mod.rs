//! Repository traits for data access
//!
//! Local link storage and the link SDK are reached through these traits.

pub mod link_repository;
pub mod link_details_source;

pub use link_repository::*;
pub use link_details_source::*;
