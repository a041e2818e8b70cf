//! World container and frame orchestration

pub mod events;
pub mod game_world;

#[cfg(test)]
mod tests;

pub use events::{EventQueue, WorldEvent};
pub use game_world::GameWorld;
