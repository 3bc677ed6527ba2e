//! Chat log, chat cards, and interaction-session metadata.
//!
//! Rolling an item produces a chat card. The card that starts an interaction
//! carries an [`InteractionSession`], the only channel through which a later,
//! causally disconnected button click can recover what was rolled, by whom,
//! and against what. Sessions are attached synchronously inside the push, so
//! a message is never observable without its metadata, and messages are never
//! mutated afterward.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dispatch::CardAction;
use truhe_core::{ItemId, TokenId};

/// Unique identifier for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub Uuid);

impl MessageId {
    /// Generate a new random message ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Correlation record tying a chat card back to its interaction.
///
/// Once attached the triple is immutable; it names the original environment
/// item (not the clone), so dispatch can re-resolve everything it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionSession {
    /// The environment item that was used.
    pub item: ItemId,
    /// The environment token the item came from.
    pub environment_token: TokenId,
    /// The token that used the item.
    pub interactor_token: TokenId,
}

/// A clickable action button on a chat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardButton {
    /// The action the button dispatches.
    pub action: CardAction,
    /// The button label.
    pub label: String,
}

impl CardButton {
    /// Create a button.
    pub fn new(action: CardAction, label: impl Into<String>) -> Self {
        Self {
            action,
            label: label.into(),
        }
    }
}

/// The rendered body of a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCard {
    /// Card title, usually the item name.
    pub title: String,
    /// Narrative description of what happened.
    pub description: String,
    /// Optional property footer.
    pub footer: Option<String>,
    /// Action buttons, in display order.
    pub buttons: Vec<CardButton>,
}

impl ChatCard {
    /// Create a card with a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            footer: None,
            buttons: Vec::new(),
        }
    }

    /// Set the footer line.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Append an action button.
    pub fn with_button(mut self, action: CardAction, label: impl Into<String>) -> Self {
        self.buttons.push(CardButton::new(action, label));
        self
    }

    /// The button dispatching the given action, if present.
    pub fn button(&self, action: CardAction) -> Option<&CardButton> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

impl fmt::Display for ChatCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = vec![format!("**{}**", self.title), self.description.clone()];
        if !self.buttons.is_empty() {
            let buttons: Vec<String> = self
                .buttons
                .iter()
                .map(|b| format!("[{}]", b.label))
                .collect();
            lines.push(buttons.join(" "));
        }
        if let Some(footer) = &self.footer {
            lines.push(footer.clone());
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// A chat message: a card, its timestamp, and optional session metadata.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Unique identifier for this message.
    pub id: MessageId,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// The message body.
    pub card: ChatCard,
    /// Correlation metadata, set at creation or never.
    pub session: Option<InteractionSession>,
}

/// One-shot decoration applied to the next pushed card.
type CardHook = Box<dyn FnOnce(&mut ChatCard)>;

/// Accumulates chat messages during a session.
#[derive(Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_hook: Option<CardHook>,
}

impl fmt::Debug for ChatLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatLog")
            .field("messages", &self.messages)
            .field("next_hook", &self.next_hook.is_some())
            .finish()
    }
}

impl ChatLog {
    /// Create an empty chat log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoration for exactly the next pushed card.
    ///
    /// The hook runs inside the push, before the message becomes observable,
    /// and is dropped afterward. Registering again replaces a pending hook.
    pub fn on_next_push(&mut self, hook: impl FnOnce(&mut ChatCard) + 'static) {
        self.next_hook = Some(Box::new(hook));
    }

    /// Whether a one-shot decoration is pending.
    pub fn has_pending_hook(&self) -> bool {
        self.next_hook.is_some()
    }

    /// Push a card without session metadata. Returns the new message's ID.
    pub fn push(&mut self, card: ChatCard) -> MessageId {
        self.push_message(card, None)
    }

    /// Push a card with an attached session. Returns the new message's ID.
    pub fn push_with_session(&mut self, card: ChatCard, session: InteractionSession) -> MessageId {
        self.push_message(card, Some(session))
    }

    fn push_message(&mut self, mut card: ChatCard, session: Option<InteractionSession>) -> MessageId {
        if let Some(hook) = self.next_hook.take() {
            hook(&mut card);
        }
        let id = MessageId::new();
        self.messages.push(ChatMessage {
            id,
            timestamp: Utc::now(),
            card,
            session,
        });
        id
    }

    /// Get a message by ID.
    pub fn message(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// The session attached to a message, if any.
    pub fn session_for(&self, id: MessageId) -> Option<&InteractionSession> {
        self.message(id).and_then(|m| m.session.as_ref())
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Return `true` if the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
