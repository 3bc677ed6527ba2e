//! Chat-card action dispatch.
//!
//! A card button click arrives long after the card was rolled, carrying only
//! the message it sits on. Dispatch re-resolves everything from the attached
//! [`InteractionSession`](crate::chat::InteractionSession) and runs the
//! game-mechanical call: attack (with the proficiency confirmation
//! sub-flow), damage, ability check, or saving throw. Whatever happens, no
//! temporary clone survives a completed dispatch.

use std::fmt;

use crate::chat::{ChatCard, InteractionSession, MessageId};
use crate::context::{InteractContext, PointerEvent};
use crate::dialog::DialogPosition;
use crate::error::{InteractError, InteractResult};
use crate::loan::ItemLoan;
use crate::prompt::ConfirmRequest;
use crate::roll;

/// An action dispatched from a chat-card button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Roll the item's attack.
    Attack,
    /// Roll the item's damage.
    Damage,
    /// Roll the interactor's ability check.
    Check,
    /// Roll the interactor's saving throw.
    Save,
}

impl CardAction {
    /// Try to parse an action from its lowercase name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "attack" => Some(Self::Attack),
            "damage" => Some(Self::Damage),
            "check" | "ability" => Some(Self::Check),
            "save" => Some(Self::Save),
            _ => None,
        }
    }
}

impl fmt::Display for CardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack => write!(f, "attack"),
            Self::Damage => write!(f, "damage"),
            Self::Check => write!(f, "check"),
            Self::Save => write!(f, "save"),
        }
    }
}

/// How a dispatch resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The action rolled; the result card is in chat.
    Rolled(MessageId),
    /// The proficiency confirmation was cancelled; nothing rolled.
    Cancelled,
}

/// Execute a card action against its session.
///
/// All three session references must resolve; a token removed from the
/// scene between roll and click is a reported error, not a silent fault.
pub fn dispatch(
    ctx: &mut InteractContext<'_>,
    action: CardAction,
    session: &InteractionSession,
    pointer: &PointerEvent,
) -> InteractResult<DispatchOutcome> {
    let environment_actor = ctx.scene.require_token(session.environment_token)?.actor;
    let interactor_actor = ctx.scene.require_token(session.interactor_token)?.actor;
    let source = ctx
        .scene
        .require_actor(environment_actor)?
        .item(session.item)
        .ok_or(truhe_core::SceneError::ItemNotFound(session.item))?
        .clone();
    let interactor_name = ctx.scene.require_actor(interactor_actor)?.name.clone();

    match action {
        CardAction::Attack => {
            let mut loan = ItemLoan::new(interactor_actor);
            let clone_id = loan.borrow_from(ctx.scene, &source)?;

            let proficient = if ctx.config.auto_proficiency {
                true
            } else {
                let request = ConfirmRequest {
                    title: "Proficiency".to_string(),
                    prompt: format!("Is {interactor_name} proficient with {}?", source.name),
                    position: DialogPosition::at(pointer.x, pointer.y),
                };
                match ctx.prompt.confirm(&request) {
                    Some(answer) => answer,
                    None => {
                        loan.settle(ctx.scene)?;
                        return Ok(DispatchOutcome::Cancelled);
                    }
                }
            };

            ctx.scene
                .require_actor_mut(interactor_actor)?
                .item_mut(clone_id)
                .ok_or(truhe_core::SceneError::ItemNotFound(clone_id))?
                .proficient = proficient;

            let result = roll::attack(ctx.rng, source.attack_bonus, proficient);
            let card = ChatCard::new(
                format!("Attack: {}", source.name),
                format!("{interactor_name} attacks with {}: {result}", source.name),
            );
            let message = ctx.chat.push(card);

            loan.consume()?;
            loan.settle(ctx.scene)?;
            Ok(DispatchOutcome::Rolled(message))
        }

        CardAction::Damage => {
            let expr = source
                .damage
                .ok_or_else(|| InteractError::NoDamage(source.name.clone()))?;

            let mut loan = ItemLoan::new(interactor_actor);
            loan.borrow_from(ctx.scene, &source)?;

            let result = roll::damage(ctx.rng, expr, pointer.alt);
            let card = ChatCard::new(
                format!("Damage: {}", source.name),
                format!("{} deals {expr}: {result}", source.name),
            );
            let message = ctx.chat.push(card);

            loan.consume()?;
            loan.settle(ctx.scene)?;
            Ok(DispatchOutcome::Rolled(message))
        }

        CardAction::Check => {
            let ability = source
                .ability
                .ok_or_else(|| InteractError::MissingAbility(source.name.clone()))?;
            let modifier = ctx.scene.require_actor(interactor_actor)?.ability_mod(ability);

            let result = roll::check(ctx.rng, modifier);
            let card = ChatCard::new(
                format!("{} Check", ability.label()),
                format!(
                    "{interactor_name} makes an ability check ({}): {result}",
                    ability.label()
                ),
            );
            Ok(DispatchOutcome::Rolled(ctx.chat.push(card)))
        }

        CardAction::Save => {
            let ability = source
                .save
                .ok_or_else(|| InteractError::MissingSave(source.name.clone()))?;
            let modifier = ctx.scene.require_actor(interactor_actor)?.ability_mod(ability);

            let result = roll::check(ctx.rng, modifier);
            let card = ChatCard::new(
                format!("{} Save", ability.label()),
                format!(
                    "{interactor_name} makes a saving throw ({}): {result}",
                    ability.label()
                ),
            );
            Ok(DispatchOutcome::Rolled(ctx.chat.push(card)))
        }
    }
}
