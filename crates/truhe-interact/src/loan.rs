//! Temporary item loans and their life cycle.
//!
//! Using an environment item briefly embeds a copy of it on the interacting
//! actor. The copy lives inside a single borrow/settle cycle and never
//! survives it: the dialog's roll phase clones, rolls, and removes; an
//! attack or damage dispatch clones again for its own roll. [`ItemLoan`]
//! enforces the transitions, so a leaked clone is a type error rather than
//! a cleanup bug.

use std::fmt;

use truhe_core::{ActionType, ActorId, Item, ItemId, ItemKind, Scene};

use crate::chat::{CardButton, ChatCard, InteractionSession, MessageId};
use crate::context::InteractContext;
use crate::dispatch::CardAction;
use crate::error::{InteractError, InteractResult};

/// Life-cycle states of a temporary item loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanState {
    /// No clone exists yet.
    Absent,
    /// The clone is embedded on the interactor.
    Cloned,
    /// The clone's use card has been rolled to chat.
    Rolled,
    /// The action consuming the clone has resolved.
    Consumed,
    /// The clone has been deleted from the interactor.
    Removed,
}

impl fmt::Display for LoanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Cloned => write!(f, "cloned"),
            Self::Rolled => write!(f, "rolled"),
            Self::Consumed => write!(f, "consumed"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// A temporary loan of one environment item to one interactor.
#[derive(Debug)]
pub struct ItemLoan {
    interactor: ActorId,
    item: Option<ItemId>,
    state: LoanState,
}

impl ItemLoan {
    /// Start a loan for the given interactor. No clone exists yet.
    pub fn new(interactor: ActorId) -> Self {
        Self {
            interactor,
            item: None,
            state: LoanState::Absent,
        }
    }

    /// The current state.
    pub fn state(&self) -> LoanState {
        self.state
    }

    /// The clone's ID while one is embedded.
    pub fn item(&self) -> Option<ItemId> {
        self.item
    }

    /// The borrowing actor.
    pub fn interactor(&self) -> ActorId {
        self.interactor
    }

    fn transition(&mut self, allowed: &[LoanState], to: LoanState) -> InteractResult<()> {
        if !allowed.contains(&self.state) {
            return Err(InteractError::LoanState {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Embed a deep copy of `source` on the interactor (`Absent -> Cloned`).
    pub fn borrow_from(&mut self, scene: &mut Scene, source: &Item) -> InteractResult<ItemId> {
        self.transition(&[LoanState::Absent], LoanState::Cloned)?;
        let interactor = scene.require_actor_mut(self.interactor)?;
        let id = interactor.embed_copy(source);
        self.item = Some(id);
        Ok(id)
    }

    /// Record that the clone's use card reached chat (`Cloned -> Rolled`).
    pub fn mark_rolled(&mut self) -> InteractResult<()> {
        self.transition(&[LoanState::Cloned], LoanState::Rolled)
    }

    /// Record that the clone's action resolved (`Cloned/Rolled -> Consumed`).
    pub fn consume(&mut self) -> InteractResult<()> {
        self.transition(&[LoanState::Cloned, LoanState::Rolled], LoanState::Consumed)
    }

    /// Delete the clone from the interactor (`-> Removed`).
    ///
    /// Valid from every live state, including the attack-cancel path where
    /// no roll ever happened.
    pub fn settle(&mut self, scene: &mut Scene) -> InteractResult<()> {
        self.transition(
            &[LoanState::Cloned, LoanState::Rolled, LoanState::Consumed],
            LoanState::Removed,
        )?;
        if let Some(id) = self.item.take() {
            scene.require_actor_mut(self.interactor)?.remove_item(id)?;
        }
        Ok(())
    }
}

/// Roll the loaned clone's use card to chat (`Cloned -> Rolled`).
///
/// Attaches the session inside the push and registers the one-shot card
/// decorations: loot and consumables lose the property footer, loot loses
/// its buttons entirely, and check consumables gain the injected
/// ability-check button.
pub fn roll_item(
    ctx: &mut InteractContext<'_>,
    loan: &mut ItemLoan,
    session: InteractionSession,
) -> InteractResult<MessageId> {
    let clone_id = loan.item().ok_or(InteractError::LoanState {
        from: loan.state(),
        to: LoanState::Rolled,
    })?;

    let interactor = ctx.scene.require_actor(loan.interactor())?;
    let clone = interactor
        .item(clone_id)
        .ok_or(truhe_core::SceneError::ItemNotFound(clone_id))?;
    let card = use_card(&interactor.name, clone);

    let kind = clone.kind;
    let action = clone.action;
    let ability = clone.ability;
    ctx.chat.on_next_push(move |card| {
        if matches!(kind, ItemKind::Loot | ItemKind::Consumable) {
            card.footer = None;
        }
        if kind == ItemKind::Loot {
            card.buttons.clear();
        }
        if kind == ItemKind::Consumable && action == Some(ActionType::Check) {
            let label = match ability {
                Some(a) => format!("{} Check", a.label()),
                None => "Ability Check".to_string(),
            };
            card.buttons.push(CardButton::new(CardAction::Check, label));
        }
    });

    let message = ctx.chat.push_with_session(card, session);
    loan.mark_rolled()?;
    Ok(message)
}

/// The default use card for an item, before decorations.
fn use_card(actor_name: &str, item: &Item) -> ChatCard {
    let mut card = ChatCard::new(
        item.name.clone(),
        format!("{actor_name} uses {}.", item.name),
    )
    .with_footer(item_footer(item));

    match item.kind {
        ItemKind::Weapon => {
            card = card
                .with_button(CardAction::Attack, "Attack")
                .with_button(CardAction::Damage, "Damage");
        }
        ItemKind::Consumable if item.action == Some(ActionType::Save) => {
            card = card.with_button(CardAction::Save, "Saving Throw");
        }
        _ => {}
    }
    card
}

/// Property footer line for an item card.
fn item_footer(item: &Item) -> String {
    match item.kind {
        ItemKind::Weapon => match item.damage {
            Some(damage) => format!("weapon · {damage}"),
            None => "weapon".to_string(),
        },
        ItemKind::Consumable => match item.action {
            Some(action) => format!("consumable · {action}"),
            None => "consumable".to_string(),
        },
        ItemKind::Loot => "loot".to_string(),
    }
}
