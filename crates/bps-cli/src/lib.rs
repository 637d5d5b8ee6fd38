//! Command-line front end for cleaning and profiling statistical tables.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod reader;
pub mod summary;
