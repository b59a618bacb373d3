//! Core game rules. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod collection;
pub mod deck;
pub mod events;
pub mod game;
pub mod profile;
pub mod rng;
pub mod schedule;
pub mod scoring;
pub mod state;
pub mod strategy;

pub use cards::*;
pub use collection::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use profile::*;
pub use rng::*;
pub use schedule::*;
pub use scoring::*;
pub use state::*;
pub use strategy::*;
