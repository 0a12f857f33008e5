//! Adapters implementing the domain ports.

pub mod scoring;
pub mod sqlite;
