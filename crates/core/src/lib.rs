#![deny(rust_2018_idioms)]

pub mod commands;
pub mod config;
pub mod features;
pub mod permissions;
pub mod state;

pub use workshop_text as text;
