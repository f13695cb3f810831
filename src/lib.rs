//! Terminal Life - Conway's Game of Life rendered to the terminal

pub mod core;
pub mod patterns;
pub mod render;
pub mod simulation;
