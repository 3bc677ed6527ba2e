//! Error types for the interaction engine.

use thiserror::Error;
use truhe_core::SceneError;

use crate::loan::LoanState;

/// Result type for interaction operations.
pub type InteractResult<T> = Result<T, InteractError>;

/// Errors that can occur during an environment interaction.
#[derive(Debug, Error)]
pub enum InteractError {
    /// The token is not flagged as an environment token.
    #[error("\"{0}\" is not an environment token")]
    NotEnvironment(String),

    /// A token, actor, or item reference failed to resolve.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// An item loan was driven through an invalid state transition.
    #[error("invalid loan transition: {from} -> {to}")]
    LoanState {
        /// The state the loan was in.
        from: LoanState,
        /// The state the transition targeted.
        to: LoanState,
    },

    /// A loot item names a macro that is not registered.
    #[error("unknown macro: \"{0}\"")]
    UnknownMacro(String),

    /// A check was dispatched for an item with no ability key.
    #[error("item \"{0}\" has no ability key")]
    MissingAbility(String),

    /// A save was dispatched for an item with no save key.
    #[error("item \"{0}\" has no save key")]
    MissingSave(String),

    /// A damage roll was dispatched for an item with no damage expression.
    #[error("item \"{0}\" has no damage expression")]
    NoDamage(String),
}
