use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::actor::{Actor, ActorId};
use crate::error::{SceneError, SceneResult};
use crate::token::{Token, TokenId};

/// The central scene model. Owns all tokens and actors.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Display name of the scene.
    pub name: String,
    tokens: HashMap<TokenId, Token>,
    actors: HashMap<ActorId, Actor>,

    // Indexes
    token_names: HashMap<String, TokenId>,
    actor_names: HashMap<String, ActorId>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: HashMap::new(),
            actors: HashMap::new(),
            token_names: HashMap::new(),
            actor_names: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Actor CRUD
    // -----------------------------------------------------------------------

    /// Add an actor to the scene. Returns the actor's ID.
    pub fn add_actor(&mut self, actor: Actor) -> SceneResult<ActorId> {
        let name_lower = actor.name.to_lowercase();
        if self.actor_names.contains_key(&name_lower) {
            return Err(SceneError::DuplicateActor(actor.name.clone()));
        }
        let id = actor.id;
        self.actor_names.insert(name_lower, id);
        self.actors.insert(id, actor);
        Ok(id)
    }

    /// Get a reference to an actor by ID.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    /// Get a mutable reference to an actor by ID.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    /// Get an actor by ID, failing if it does not exist.
    pub fn require_actor(&self, id: ActorId) -> SceneResult<&Actor> {
        self.actors.get(&id).ok_or(SceneError::ActorNotFound(id))
    }

    /// Get a mutable actor by ID, failing if it does not exist.
    pub fn require_actor_mut(&mut self, id: ActorId) -> SceneResult<&mut Actor> {
        self.actors
            .get_mut(&id)
            .ok_or(SceneError::ActorNotFound(id))
    }

    // -----------------------------------------------------------------------
    // Token CRUD
    // -----------------------------------------------------------------------

    /// Add a token to the scene. The referenced actor must already exist.
    pub fn add_token(&mut self, token: Token) -> SceneResult<TokenId> {
        if !self.actors.contains_key(&token.actor) {
            return Err(SceneError::ActorNotFound(token.actor));
        }
        let name_lower = token.name.to_lowercase();
        if self.token_names.contains_key(&name_lower) {
            return Err(SceneError::DuplicateToken(token.name.clone()));
        }
        let id = token.id;
        self.token_names.insert(name_lower, id);
        self.tokens.insert(id, token);
        Ok(id)
    }

    /// Get a reference to a token by ID.
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(&id)
    }

    /// Get a token by ID, failing if it does not exist.
    pub fn require_token(&self, id: TokenId) -> SceneResult<&Token> {
        self.tokens.get(&id).ok_or(SceneError::TokenNotFound(id))
    }

    /// Find a token by name (case-insensitive).
    pub fn token_by_name(&self, name: &str) -> Option<&Token> {
        self.token_names
            .get(&name.to_lowercase())
            .and_then(|id| self.tokens.get(id))
    }

    /// Remove a token from the scene, returning it.
    pub fn remove_token(&mut self, id: TokenId) -> SceneResult<Token> {
        let token = self
            .tokens
            .remove(&id)
            .ok_or(SceneError::TokenNotFound(id))?;
        self.token_names.remove(&token.name.to_lowercase());
        Ok(token)
    }

    /// The actor a token represents, failing if either side is missing.
    pub fn actor_of(&self, token: TokenId) -> SceneResult<&Actor> {
        let token = self.require_token(token)?;
        self.require_actor(token.actor)
    }

    /// Iterate over all tokens in the scene.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    /// Iterate over all actors in the scene.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Deserialize a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let doc: SceneDoc = serde_json::from_str(json)?;
        Ok(doc.into_scene())
    }

    /// Serialize the scene to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut actors: Vec<&Actor> = self.actors.values().collect();
        actors.sort_by(|a, b| a.name.cmp(&b.name));
        let mut tokens: Vec<&Token> = self.tokens.values().collect();
        tokens.sort_by(|a, b| a.name.cmp(&b.name));

        let doc = SceneDoc {
            name: self.name.clone(),
            actors: actors.into_iter().cloned().collect(),
            tokens: tokens.into_iter().cloned().collect(),
        };
        serde_json::to_string_pretty(&doc)
    }
}

/// Flat on-disk representation of a scene. Indexes are rebuilt on load.
#[derive(Debug, Serialize, Deserialize)]
struct SceneDoc {
    name: String,
    actors: Vec<Actor>,
    tokens: Vec<Token>,
}

impl SceneDoc {
    fn into_scene(self) -> Scene {
        let mut scene = Scene::new(self.name);
        for actor in self.actors {
            // Duplicate names in a hand-edited file: last one wins the index,
            // both stay addressable by ID.
            let name_lower = actor.name.to_lowercase();
            scene.actor_names.insert(name_lower, actor.id);
            scene.actors.insert(actor.id, actor);
        }
        for token in self.tokens {
            let name_lower = token.name.to_lowercase();
            scene.token_names.insert(name_lower, token.id);
            scene.tokens.insert(token.id, token);
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn chest_scene() -> Scene {
        let mut scene = Scene::new("Crypt");
        let mut chest = Actor::new("Old Chest");
        chest.add_item(Item::loot("Gold Pouch", None));
        let chest_id = scene.add_actor(chest).unwrap();
        scene
            .add_token(Token::new("Old Chest", chest_id).environment())
            .unwrap();
        scene
    }

    #[test]
    fn add_and_find_token() {
        let scene = chest_scene();
        let token = scene.token_by_name("old chest").unwrap();
        assert!(token.environment);
        assert!(scene.token(token.id).is_some());
    }

    #[test]
    fn duplicate_token_name_rejected() {
        let mut scene = chest_scene();
        let actor_id = scene.actors().next().unwrap().id;
        let result = scene.add_token(Token::new("OLD CHEST", actor_id));
        assert!(matches!(result, Err(SceneError::DuplicateToken(_))));
    }

    #[test]
    fn token_requires_existing_actor() {
        let mut scene = Scene::new("Crypt");
        let result = scene.add_token(Token::new("Ghost", ActorId::new()));
        assert!(matches!(result, Err(SceneError::ActorNotFound(_))));
    }

    #[test]
    fn actor_of_resolves_through_token() {
        let scene = chest_scene();
        let token_id = scene.token_by_name("Old Chest").unwrap().id;
        let actor = scene.actor_of(token_id).unwrap();
        assert_eq!(actor.name, "Old Chest");
    }

    #[test]
    fn require_token_fails_for_missing() {
        let scene = chest_scene();
        assert!(matches!(
            scene.require_token(TokenId::new()),
            Err(SceneError::TokenNotFound(_))
        ));
    }

    #[test]
    fn remove_token_clears_name_index() {
        let mut scene = chest_scene();
        let token_id = scene.token_by_name("Old Chest").unwrap().id;
        scene.remove_token(token_id).unwrap();
        assert!(scene.token_by_name("Old Chest").is_none());
        assert!(scene.remove_token(token_id).is_err());
    }

    #[test]
    fn json_round_trip() {
        let scene = chest_scene();
        let json = scene.to_json().unwrap();
        let loaded = Scene::from_json(&json).unwrap();

        assert_eq!(loaded.name, "Crypt");
        let token = loaded.token_by_name("Old Chest").unwrap();
        assert!(token.environment);
        let actor = loaded.actor_of(token.id).unwrap();
        assert_eq!(actor.items.len(), 1);
        assert_eq!(actor.items[0].name, "Gold Pouch");
    }
}
