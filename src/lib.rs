// ABOUTME: Library crate for twin exposing the session engine for the binary and tests

#![allow(missing_docs)]

pub mod cli;
pub mod config;
pub mod models;
pub mod picker;
pub mod session;
pub mod tmux;
