use crate::actor::ActorId;
use crate::item::ItemId;
use crate::token::TokenId;

/// Alias for `Result<T, SceneError>`.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur when manipulating a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The requested token ID does not exist in the scene.
    #[error("token not found: {0}")]
    TokenNotFound(TokenId),

    /// The requested actor ID does not exist in the scene.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// The requested item ID does not exist on the actor.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// A token with the same name already exists.
    #[error("token already exists: \"{0}\"")]
    DuplicateToken(String),

    /// An actor with the same name already exists.
    #[error("actor already exists: \"{0}\"")]
    DuplicateActor(String),
}
