//! Utility functions shared across layers.
//!
//! - [`date`] - Strict `YYYY-MM-DD` date parsing

pub mod date;
