//! Natural-language order search client.
//!
//! Queries go to a remote search service that infers structured filters;
//! this crate summarizes those filters for display and drives the
//! one-shot and interactive front ends.

pub mod cli;
pub mod client;
pub mod config;
pub mod filters;
pub mod logging;
pub mod report;
pub mod session;
pub mod ui;
