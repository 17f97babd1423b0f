//! Core link functionality
//!
//! Token resolution, gasless deposit eligibility, value conversion and the
//! created-links dashboard.

pub mod tokens;
pub mod gasless;
pub mod value;
pub mod dashboard;
