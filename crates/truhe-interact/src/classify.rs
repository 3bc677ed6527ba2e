//! Token classification and click semantics.
//!
//! Environment tokens change how clicks behave: a first click no longer
//! steals the selection, a second click opens the interaction dialog instead
//! of the sheet, and any user may "view" the token so the dialog can open
//! for non-owners. Each decision is a pure function over the token (and
//! user); callers run the default behavior themselves when told to.

use truhe_core::Token;

use crate::context::User;

/// Whether a token participates in default click handling or the
/// environment override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickBehavior {
    /// Not an environment token; run the host's default behavior.
    Default,
    /// An environment token; the interaction engine takes over.
    EnvironmentOverride,
}

/// What a single click should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstClick {
    /// Select the token as usual.
    Select,
    /// Keep the current selection untouched.
    Ignore,
}

/// What a double click should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondClick {
    /// Open the actor's sheet as usual.
    OpenSheet,
    /// Open the interaction dialog.
    OpenInteraction,
}

/// Classify a token's click handling.
pub fn click_behavior(token: &Token) -> ClickBehavior {
    if token.environment {
        ClickBehavior::EnvironmentOverride
    } else {
        ClickBehavior::Default
    }
}

/// Whether the user may view the token.
///
/// Environment tokens are viewable by anyone so the dialog can open for
/// non-owners; other tokens fall back to the ownership check.
pub fn can_view(token: &Token, user: &User) -> bool {
    token.environment || user.gm || token.is_owner(&user.name)
}

/// First-click semantics: clicking an environment token must not deselect
/// the currently controlled token.
pub fn on_first_click(token: &Token) -> FirstClick {
    match click_behavior(token) {
        ClickBehavior::Default => FirstClick::Select,
        ClickBehavior::EnvironmentOverride => FirstClick::Ignore,
    }
}

/// Second-click semantics: environment tokens open the interaction dialog
/// instead of the sheet.
pub fn on_second_click(token: &Token) -> SecondClick {
    match click_behavior(token) {
        ClickBehavior::Default => SecondClick::OpenSheet,
        ClickBehavior::EnvironmentOverride => SecondClick::OpenInteraction,
    }
}
