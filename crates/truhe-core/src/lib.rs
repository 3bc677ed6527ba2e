//! Core types for Truhe: scenes, tokens, actors, and items.
//!
//! This crate defines the data model the interaction engine operates on. It
//! is independent of any user interface: you can construct a [`Scene`]
//! programmatically or deserialize one from JSON.

/// Actors and their embedded item collections.
pub mod actor;
/// Error types used throughout the crate.
pub mod error;
/// Items, item kinds, abilities, and damage expressions.
pub mod item;
/// The scene model that owns tokens and actors.
pub mod scene;
/// Tokens placed in a scene, referencing actors.
pub mod token;

/// Re-export actor types.
pub use actor::{Actor, ActorId};
/// Re-export error types.
pub use error::{SceneError, SceneResult};
/// Re-export item types.
pub use item::{Ability, ActionType, DiceExpr, Item, ItemId, ItemKind};
/// Re-export scene types.
pub use scene::Scene;
/// Re-export token types.
pub use token::{Token, TokenId};
