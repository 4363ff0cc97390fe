//! Core functionality shared by every layer: macros, errors, logging

#[macro_use]
pub mod utils;
pub mod error;
pub mod logging;

pub use error::LifeError;
