//! Infrastructure layer - Configuration file I/O

pub mod config;
