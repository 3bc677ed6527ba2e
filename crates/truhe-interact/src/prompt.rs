//! Yes/no/cancel confirmation prompting.

use std::collections::VecDeque;

use crate::dialog::DialogPosition;

/// A confirmation put to the user, positioned near the triggering pointer.
#[derive(Debug, Clone)]
pub struct ConfirmRequest {
    /// Short title for the confirmation.
    pub title: String,
    /// The question being asked.
    pub prompt: String,
    /// Where the confirmation should appear.
    pub position: DialogPosition,
}

/// Presents a yes/no/cancel confirmation to the user.
///
/// `Some(true)` / `Some(false)` answer the question; `None` means the user
/// cancelled outright.
pub trait ConfirmPrompt {
    /// Ask the user to confirm.
    fn confirm(&mut self, request: &ConfirmRequest) -> Option<bool>;
}

/// A prompt that plays back a fixed sequence of answers.
///
/// Used by tests and scripted sessions; an exhausted script cancels.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<bool>>,
    asked: Vec<ConfirmRequest>,
}

impl ScriptedPrompt {
    /// Create a prompt that always cancels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a prompt answering with the given sequence.
    pub fn with_answers(answers: impl IntoIterator<Item = Option<bool>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// The requests this prompt has been asked, in order.
    pub fn asked(&self) -> &[ConfirmRequest] {
        &self.asked
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&mut self, request: &ConfirmRequest) -> Option<bool> {
        self.asked.push(request.clone());
        self.answers.pop_front().flatten()
    }
}
