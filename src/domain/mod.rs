//! Domain types shared by the grid, the engine and the JS facade

pub mod cell;

pub use cell::Cell;
