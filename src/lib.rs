//! Loresheet - Pathfinder Character Sheet Engine

pub mod assets;
pub mod core;
pub mod sheet;
pub mod spells;
pub mod stats;
pub mod store;
