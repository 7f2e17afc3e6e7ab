//! Button Kit - a configurable GPUI button with a storybook
//!
//! The button's style resolution and activation contract live in
//! [`components`] and are usable without a window. The demo and storybook
//! binaries are callers of that contract.

pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod stories;
pub mod storybook;
