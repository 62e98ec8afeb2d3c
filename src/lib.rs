pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod input;
pub mod spawner;
