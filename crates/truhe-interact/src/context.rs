//! The explicit context threaded through every interaction call.
//!
//! The engine never reaches for ambient state: the current user, the token
//! selection, configuration, chat, and prompting all travel in an
//! [`InteractContext`] borrowed for the duration of one call.

use rand::rngs::StdRng;
use truhe_core::{Scene, TokenId};

use crate::chat::ChatLog;
use crate::config::InteractConfig;
use crate::macros::Macros;
use crate::notice::Notices;
use crate::prompt::ConfirmPrompt;

/// The user driving the interaction.
#[derive(Debug, Clone)]
pub struct User {
    /// Player name, matched against token ownership.
    pub name: String,
    /// Whether the user has GM privileges.
    pub gm: bool,
}

impl User {
    /// Create a regular player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gm: false,
        }
    }

    /// Create a GM.
    pub fn gm(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gm: true,
        }
    }
}

/// The ordered set of currently selected tokens.
///
/// The first selected token acts as the interactor.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    tokens: Vec<TokenId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token to the selection if not already present.
    pub fn select(&mut self, token: TokenId) {
        if !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
    }

    /// Replace the selection with a single token.
    pub fn select_only(&mut self, token: TokenId) {
        self.tokens.clear();
        self.tokens.push(token);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// The token acting as the interactor, if any.
    pub fn first(&self) -> Option<TokenId> {
        self.tokens.first().copied()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All selected tokens, in selection order.
    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }
}

/// A pointer event carried by clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerEvent {
    /// Horizontal pointer position.
    pub x: i32,
    /// Vertical pointer position.
    pub y: i32,
    /// Whether the alt modifier was held (critical damage).
    pub alt: bool,
}

impl PointerEvent {
    /// A pointer event at the given coordinates.
    pub fn at(x: i32, y: i32) -> Self {
        Self { x, y, alt: false }
    }

    /// Mark the alt modifier as held.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

/// Mutable context passed to every interaction operation.
pub struct InteractContext<'a> {
    /// The scene being interacted with.
    pub scene: &'a mut Scene,
    /// The user driving the interaction.
    pub user: &'a User,
    /// The current token selection.
    pub selection: &'a Selection,
    /// Configuration options.
    pub config: &'a InteractConfig,
    /// The chat log receiving cards.
    pub chat: &'a mut ChatLog,
    /// Warning buffer for recoverable problems.
    pub notices: &'a mut Notices,
    /// Macro registry for loot items.
    pub macros: &'a mut Macros,
    /// Confirmation prompting.
    pub prompt: &'a mut dyn ConfirmPrompt,
    /// RNG backing all rolls.
    pub rng: &'a mut StdRng,
}

impl InteractContext<'_> {
    /// Raise a user-visible warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.notices.warn(message);
    }
}
