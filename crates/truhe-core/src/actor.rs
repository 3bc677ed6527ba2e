use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SceneError, SceneResult};
use crate::item::{Ability, Item, ItemId};

/// Unique identifier for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Generate a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An actor owning a collection of items.
///
/// During an interaction one actor plays the environment role (source of
/// items, read-only) and another the interactor role (briefly granted a
/// copy of one item). Items keep their insertion order, which is the stable
/// tiebreak when the catalog sorts them for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier for this actor.
    pub id: ActorId,
    /// Display name of the actor.
    pub name: String,
    /// Items owned by this actor, in insertion order.
    pub items: Vec<Item>,
    /// Ability modifiers. Missing abilities count as +0.
    pub abilities: HashMap<Ability, i32>,
}

impl Actor {
    /// Create a new actor with a random ID and no items.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            items: Vec::new(),
            abilities: HashMap::new(),
        }
    }

    /// Add an item, keeping its existing ID. Returns the item's ID.
    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Set an ability modifier.
    pub fn with_ability(mut self, ability: Ability, modifier: i32) -> Self {
        self.abilities.insert(ability, modifier);
        self
    }

    /// Embed a deep copy of another actor's item under a fresh ID.
    ///
    /// Returns the new ID. This is how an interaction temporarily grants an
    /// environment item to the interactor.
    pub fn embed_copy(&mut self, source: &Item) -> ItemId {
        self.add_item(source.duplicate())
    }

    /// Get a reference to an item by ID.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Get a mutable reference to an item by ID.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Remove an item by ID, returning it.
    pub fn remove_item(&mut self, id: ItemId) -> SceneResult<Item> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(SceneError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// The actor's modifier for an ability (0 if unset).
    pub fn ability_mod(&self, ability: Ability) -> i32 {
        self.abilities.get(&ability).copied().unwrap_or(0)
    }
}
