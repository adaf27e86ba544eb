// ABOUTME: Data models for twin recipes

pub mod recipe;

pub use recipe::{Recipe, Window};
