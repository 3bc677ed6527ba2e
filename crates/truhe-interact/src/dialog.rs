//! The interaction dialog controller.
//!
//! Double-clicking an environment token opens a transient dialog listing the
//! environment's items in catalog order. Clicking an entry runs the loan's
//! roll phase for the currently selected interactor; clicking a button on
//! the resulting chat card later feeds [`handle_card_action`], which either
//! dispatches against the attached session or explicitly hands the click
//! back to the host's default card handling.

use truhe_core::{ActionType, ItemId, ItemKind, SceneError, TokenId};

use crate::catalog::{self, Bucket};
use crate::chat::{InteractionSession, MessageId};
use crate::context::{InteractContext, PointerEvent};
use crate::dispatch::{self, CardAction, DispatchOutcome};
use crate::error::{InteractError, InteractResult};
use crate::loan::{self, ItemLoan};

/// Warning raised when an item is clicked with no interactor selected.
pub const SELECT_TOKEN_WARNING: &str = "Select a token to interact with the environment.";

/// Screen position of a dialog, derived from the opening pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogPosition {
    /// Distance from the left edge.
    pub left: i32,
    /// Distance from the top edge.
    pub top: i32,
}

impl DialogPosition {
    /// A position at the given coordinates.
    pub fn at(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    /// The interaction dialog opens beside and slightly above the pointer.
    pub fn near_pointer(pointer: &PointerEvent) -> Self {
        Self {
            left: pointer.x + 50,
            top: pointer.y - 10,
        }
    }
}

/// One clickable entry in the interaction dialog.
#[derive(Debug, Clone)]
pub struct DialogEntry {
    /// The environment item this entry uses.
    pub item: ItemId,
    /// Display name.
    pub name: String,
    /// The bucket the entry displays under.
    pub bucket: Bucket,
}

/// A transient dialog exposing an environment token's inventory.
#[derive(Debug)]
pub struct InteractionDialog {
    /// The environment token this dialog belongs to.
    pub environment: TokenId,
    /// Ordered entries, one per displayable item.
    pub entries: Vec<DialogEntry>,
    /// Where the dialog appears.
    pub position: DialogPosition,
    /// Whether the "open sheet" button is shown (GM only).
    pub sheet_button: bool,
    open: bool,
}

impl InteractionDialog {
    /// Whether the dialog is still open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close the dialog.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// The entry at a zero-based display index.
    pub fn entry(&self, index: usize) -> Option<&DialogEntry> {
        self.entries.get(index)
    }
}

/// How an entry click resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The item was used; its card is in chat.
    Used {
        /// The use card's message ID.
        message: MessageId,
        /// Whether the dialog auto-closed.
        closed: bool,
    },
    /// No interactor token is selected; a warning was raised and nothing
    /// was mutated.
    NoInteractor,
}

/// How a chat-card button click resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    /// The click belonged to an interaction and was dispatched.
    Handled(DispatchOutcome),
    /// No session metadata; the host should run its default card behavior.
    Default,
}

/// Open the interaction dialog for an environment token.
pub fn open_dialog(
    ctx: &InteractContext<'_>,
    token: TokenId,
    pointer: &PointerEvent,
) -> InteractResult<InteractionDialog> {
    let environment = ctx.scene.require_token(token)?;
    if !environment.environment {
        return Err(InteractError::NotEnvironment(environment.name.clone()));
    }

    let actor = ctx.scene.require_actor(environment.actor)?;
    let entries = catalog::build_display_list(actor)
        .into_iter()
        .map(|item| DialogEntry {
            item: item.id,
            name: item.name.clone(),
            bucket: catalog::bucket_of(item).expect("display list items are bucketed"),
        })
        .collect();

    Ok(InteractionDialog {
        environment: token,
        entries,
        position: DialogPosition::near_pointer(pointer),
        sheet_button: ctx.user.gm,
        open: true,
    })
}

/// Use one of the dialog's entries with the selected interactor.
///
/// The loan's roll phase runs to completion: clone, roll the use card with
/// its session attached, remove the clone. Loot then executes its macro
/// with the interactor bound, after cleanup, and the dialog auto-closes
/// when configured to.
pub fn click_entry(
    ctx: &mut InteractContext<'_>,
    dialog: &mut InteractionDialog,
    item: ItemId,
) -> InteractResult<EntryOutcome> {
    let Some(interactor_token) = ctx.selection.first() else {
        ctx.warn(SELECT_TOKEN_WARNING);
        return Ok(EntryOutcome::NoInteractor);
    };

    let environment_actor = ctx.scene.require_token(dialog.environment)?.actor;
    let source = ctx
        .scene
        .require_actor(environment_actor)?
        .item(item)
        .ok_or(SceneError::ItemNotFound(item))?
        .clone();
    let interactor_actor = ctx.scene.require_token(interactor_token)?.actor;

    let session = InteractionSession {
        item,
        environment_token: dialog.environment,
        interactor_token,
    };

    let mut loan = ItemLoan::new(interactor_actor);
    loan.borrow_from(ctx.scene, &source)?;
    let message = loan::roll_item(ctx, &mut loan, session)?;

    // Loot and non-action items need no further click; everything else stays
    // pending on the card's buttons. The clone is removed either way.
    if source.kind == ItemKind::Loot || source.action == Some(ActionType::Utility) {
        loan.consume()?;
    }
    loan.settle(ctx.scene)?;

    let closed = if ctx.config.auto_close_dialog {
        dialog.close();
        true
    } else {
        false
    };

    if source.kind == ItemKind::Loot
        && let Some(macro_name) = &source.macro_name
    {
        ctx.macros.run(macro_name, interactor_actor, interactor_token)?;
    }

    Ok(EntryOutcome::Used { message, closed })
}

/// Handle a chat-card button click.
///
/// Messages without session metadata (or stale message IDs) explicitly fall
/// back to the host's default behavior.
pub fn handle_card_action(
    ctx: &mut InteractContext<'_>,
    message: MessageId,
    action: CardAction,
    pointer: &PointerEvent,
) -> InteractResult<CardOutcome> {
    let Some(session) = ctx.chat.session_for(message).copied() else {
        return Ok(CardOutcome::Default);
    };
    let outcome = dispatch::dispatch(ctx, action, &session, pointer)?;
    Ok(CardOutcome::Handled(outcome))
}
