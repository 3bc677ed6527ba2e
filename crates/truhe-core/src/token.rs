use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actor::ActorId;

/// Unique identifier for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub Uuid);

impl TokenId {
    /// Generate a new random token ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A token placed in a scene, referencing an actor.
///
/// The `environment` flag marks a token as an interactable scene object
/// (chest, trap, terrain feature) rather than a playable character. The flag
/// is set through external configuration and is read-only to the interaction
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Unique identifier for this token.
    pub id: TokenId,
    /// Display name of the token.
    pub name: String,
    /// The actor this token represents.
    pub actor: ActorId,
    /// Whether this token is an environment token.
    #[serde(default)]
    pub environment: bool,
    /// Player names with ownership of this token.
    #[serde(default)]
    pub owners: Vec<String>,
}

impl Token {
    /// Create a new token for the given actor.
    pub fn new(name: impl Into<String>, actor: ActorId) -> Self {
        Self {
            id: TokenId::new(),
            name: name.into(),
            actor,
            environment: false,
            owners: Vec::new(),
        }
    }

    /// Mark this token as an environment token.
    pub fn environment(mut self) -> Self {
        self.environment = true;
        self
    }

    /// Grant ownership to a player.
    pub fn owned_by(mut self, player: impl Into<String>) -> Self {
        self.owners.push(player.into());
        self
    }

    /// Whether the named player owns this token.
    pub fn is_owner(&self, player: &str) -> bool {
        self.owners.iter().any(|o| o == player)
    }
}
