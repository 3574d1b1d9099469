//! Rule and simulation of a grid world.

pub mod rule;
mod world;

pub use world::World;
