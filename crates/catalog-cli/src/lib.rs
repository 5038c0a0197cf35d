//! Command-line front end for the product catalog.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
