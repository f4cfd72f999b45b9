//! Request handlers

pub mod extract;
pub mod health;
pub mod metrics;
