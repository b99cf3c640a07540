// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod core;
pub mod error;
pub mod model;
pub mod params;
pub mod progress;
pub mod render;
pub mod scholar;
pub mod store;
