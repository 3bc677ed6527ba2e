//! Environment-token interaction engine.
//!
//! A token flagged as an environment object (a chest, a trap, a terrain
//! feature) exposes its inventory through a transient dialog. The acting
//! character borrows one item for the duration of a single action (attack,
//! damage roll, ability check, saving throw, or loot macro) and the loan is
//! revoked once the action resolves, leaving a durable record in the chat
//! log. This crate is UI-agnostic: rendering, input, and prompting are
//! supplied by the caller through the [`InteractContext`].

/// Catalog building: bucketing and ordering an environment's items.
pub mod catalog;
/// Chat log, chat cards, and interaction-session metadata.
pub mod chat;
/// Token classification and click semantics.
pub mod classify;
/// Session configuration options.
pub mod config;
/// The explicit context threaded through every interaction call.
pub mod context;
/// The interaction dialog controller.
pub mod dialog;
/// Chat-card action dispatch.
pub mod dispatch;
/// Error types for the interaction engine.
pub mod error;
/// Temporary item loans and their life cycle.
pub mod loan;
/// Macro registry for loot items.
pub mod macros;
/// User-visible warning notices.
pub mod notice;
/// Yes/no/cancel confirmation prompting.
pub mod prompt;
/// Dice rolls backing the dispatched actions.
pub mod roll;

pub use catalog::{Bucket, build_display_list};
pub use chat::{CardButton, ChatCard, ChatLog, ChatMessage, InteractionSession, MessageId};
pub use classify::{ClickBehavior, FirstClick, SecondClick};
pub use config::InteractConfig;
pub use context::{InteractContext, PointerEvent, Selection, User};
pub use dialog::{CardOutcome, DialogPosition, EntryOutcome, InteractionDialog};
pub use dispatch::{CardAction, DispatchOutcome};
pub use error::{InteractError, InteractResult};
pub use loan::{ItemLoan, LoanState};
pub use macros::Macros;
pub use notice::Notices;
pub use prompt::{ConfirmPrompt, ConfirmRequest, ScriptedPrompt};
