#![recursion_limit = "256"]

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod export;
pub mod model;
pub mod riot;

#[cfg(test)]
pub mod test_helpers;
