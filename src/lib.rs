pub mod app;
pub mod config;
pub mod domain;
pub mod ena;
pub mod error;
pub mod fields;
pub mod persist;
