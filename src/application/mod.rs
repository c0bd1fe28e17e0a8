//! Application services: outline extraction and error reporting.

pub mod error;
pub mod outline;
