//! Infrastructure: filesystem access and telemetry.

pub mod documents;
pub mod error;
pub mod telemetry;
