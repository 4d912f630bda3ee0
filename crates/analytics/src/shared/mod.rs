pub mod config;
pub mod error;
pub mod indicators;
pub mod payload;
