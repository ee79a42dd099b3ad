//! waopen Library
//!
//! Phone number normalization, clipboard detection and deep link launching
//! shared by the `waopen` CLI and the `waopen-launcher` GUI.

pub mod clipboard;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod launcher;
