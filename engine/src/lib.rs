// Engine library root
// This file declares the modules for the engine crate.

pub mod calculators;
pub mod config;
pub mod documents;
pub mod error;
pub mod services;
