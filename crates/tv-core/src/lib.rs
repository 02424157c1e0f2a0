//! Core engine for Thornvale: the world model, precondition evaluation,
//! per-item action registries, and the command interpreter.
//!
//! This crate is independent of any particular story. Content crates
//! assemble a [`World`] through the public API (locations, connections,
//! items, blocks, actions) and hand it to a [`Session`], which turns raw
//! player input into world mutations and textual feedback. The surrounding
//! session loop only relays stop/continue control flow.

/// Actions and the effects they apply to the world.
pub mod action;
/// Error types used throughout the crate.
pub mod error;
/// Chronological log of submitted commands.
pub mod history;
/// Items: gettable objects and interactable scenery.
pub mod item;
/// Locations, directions, exits, and blocks.
pub mod location;
/// Name matching between raw input and world nouns.
pub mod matching;
/// Declarative checks evaluated against world state.
pub mod precondition;
/// The command interpreter driving a play session.
pub mod session;
/// The central world model: location arena, player position, inventory.
pub mod world;

pub use action::{Action, Effect};
pub use error::{EngineError, EngineResult};
pub use history::{CommandRecord, History};
pub use item::Item;
pub use location::{Block, Direction, Exit, Location, LocationId};
pub use precondition::{Evaluation, Precondition};
pub use session::{Intent, Response, Session};
pub use world::World;
