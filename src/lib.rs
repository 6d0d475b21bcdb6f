// Public module exports for the binary crate and integration tests
pub mod cell;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod grid;
pub mod html;
pub mod logging;
pub mod table;
