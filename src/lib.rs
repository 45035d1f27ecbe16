//! BepInEx Setup
//!
//! Finds Unity games in Steam libraries, works out whether each one runs on Mono or
//! IL2CPP, and installs a chosen BepInEx release into it.
//! The `core` feature exposes detection only; `installer` adds downloading and
//! extraction, and `full` adds the console front end used by the binary.

#[macro_use]
pub mod paths;

pub mod config;
pub mod error;
pub mod game_finder;
pub mod github;
pub mod logging;

#[cfg(feature = "installer")]
pub mod installers;
#[cfg(feature = "installer")]
pub mod utils;

#[cfg(feature = "full")]
pub mod app;
#[cfg(feature = "full")]
pub mod ui;
