//! Interactive play session driving the interaction engine.
//!
//! `PlaySession` owns a scene plus the interaction state (selection, chat,
//! dialog, macros) and turns text commands into engine calls: `select` and
//! `open` follow the token click semantics, `use` clicks a dialog entry,
//! and `attack`/`damage`/`check`/`save` click the buttons on the last card.

use rand::SeedableRng;
use rand::rngs::StdRng;

use truhe_core::{Ability, Scene, TokenId};
use truhe_interact::{
    CardAction, CardOutcome, ChatLog, ConfirmPrompt, DispatchOutcome, EntryOutcome,
    InteractConfig, InteractContext, InteractResult, InteractionDialog, Macros, MessageId,
    Notices, PointerEvent, Selection, User, classify, dialog,
};

/// Where synthetic REPL clicks land; only relative dialog offsets matter.
const CLICK: PointerEvent = PointerEvent {
    x: 160,
    y: 120,
    alt: false,
};

/// An interactive session over one scene.
pub struct PlaySession {
    scene: Scene,
    user: User,
    selection: Selection,
    config: InteractConfig,
    chat: ChatLog,
    notices: Notices,
    macros: Macros,
    prompt: Box<dyn ConfirmPrompt>,
    rng: StdRng,
    dialog: Option<InteractionDialog>,
    last_card: Option<MessageId>,
}

impl PlaySession {
    /// Create a session over a scene.
    ///
    /// Every macro named by a loot item is given a default body, so hand
    /// written scenes work without a separate macro file.
    pub fn new(
        scene: Scene,
        user: User,
        config: InteractConfig,
        prompt: Box<dyn ConfirmPrompt>,
    ) -> Self {
        let mut macros = Macros::new();
        for actor in scene.actors() {
            for item in &actor.items {
                if let Some(name) = &item.macro_name
                    && !macros.contains(name)
                {
                    macros.register(name, format!("The '{name}' macro runs."));
                }
            }
        }

        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            scene,
            user,
            selection: Selection::new(),
            config,
            chat: ChatLog::new(),
            notices: Notices::new(),
            macros,
            prompt,
            rng,
            dialog: None,
            last_card: None,
        }
    }

    /// The chat log accumulated so far.
    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn ctx(&mut self) -> InteractContext<'_> {
        InteractContext {
            scene: &mut self.scene,
            user: &self.user,
            selection: &self.selection,
            config: &self.config,
            chat: &mut self.chat,
            notices: &mut self.notices,
            macros: &mut self.macros,
            prompt: self.prompt.as_mut(),
            rng: &mut self.rng,
        }
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> InteractResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "tokens" => Ok(self.do_tokens()),
            "select" => Ok(self.do_select(rest)),
            "open" => self.do_open(rest),
            "use" => self.do_use(rest),
            "attack" | "damage" | "check" | "save" => self.do_card_action(&cmd, rest),
            "sheet" => Ok(self.do_sheet()),
            "chat" => Ok(self.do_chat()),
            "status" => Ok(self.do_status()),
            "help" => Ok(Self::help().to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Ok(format!("Unknown command: {cmd} (try 'help')")),
        }
    }

    fn do_tokens(&self) -> String {
        let mut tokens: Vec<_> = self.scene.tokens().collect();
        tokens.sort_by(|a, b| a.name.cmp(&b.name));

        let mut out = format!("Tokens in '{}':\n", self.scene.name);
        for token in tokens {
            let mark = if self.selection.first() == Some(token.id) {
                "*"
            } else {
                " "
            };
            let kind = if token.environment {
                " (environment)"
            } else {
                ""
            };
            out.push_str(&format!("  {mark} {}{kind}\n", token.name));
        }
        out.trim_end().to_string()
    }

    fn do_select(&mut self, name: &str) -> String {
        let Some(token) = self.scene.token_by_name(name) else {
            return format!("No token named '{name}'.");
        };

        match classify::on_first_click(token) {
            classify::FirstClick::Select => {
                let id = token.id;
                let name = token.name.clone();
                self.selection.select_only(id);
                format!("Selected {name}.")
            }
            // Environment tokens never steal the selection
            classify::FirstClick::Ignore => {
                format!("The {} stays inert; your selection is unchanged.", token.name)
            }
        }
    }

    fn do_open(&mut self, name: &str) -> InteractResult<String> {
        let Some(token) = self.scene.token_by_name(name) else {
            return Ok(format!("No token named '{name}'."));
        };
        let token_id = token.id;

        match classify::on_second_click(token) {
            classify::SecondClick::OpenSheet => Ok(self.open_sheet(token_id)),
            classify::SecondClick::OpenInteraction => {
                let dlg = dialog::open_dialog(&self.ctx(), token_id, &CLICK)?;
                let rendered = Self::render_dialog(&dlg);
                self.dialog = Some(dlg);
                Ok(rendered)
            }
        }
    }

    fn open_sheet(&mut self, token: TokenId) -> String {
        let Some(token) = self.scene.token(token) else {
            return "That token is gone.".to_string();
        };
        if !classify::can_view(token, &self.user) {
            return format!("You don't own {}.", token.name);
        }
        let Some(actor) = self.scene.actor(token.actor) else {
            return format!("{} has no actor.", token.name);
        };

        let mut out = format!("--- {} ---\n", actor.name);
        let mut abilities: Vec<(Ability, i32)> =
            actor.abilities.iter().map(|(a, m)| (*a, *m)).collect();
        abilities.sort_by_key(|(a, _)| a.label());
        for (ability, modifier) in abilities {
            out.push_str(&format!("  {}: {modifier:+}\n", ability.label()));
        }
        if actor.items.is_empty() {
            out.push_str("  (no items)");
        } else {
            for item in &actor.items {
                out.push_str(&format!("  {} [{}]\n", item.name, item.kind));
            }
        }
        out.trim_end().to_string()
    }

    fn render_dialog(dlg: &InteractionDialog) -> String {
        let mut out = "Interact with the environment:\n".to_string();
        for (index, entry) in dlg.entries.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} ({})\n",
                index + 1,
                entry.name,
                entry.bucket.label()
            ));
        }
        if dlg.entries.is_empty() {
            out.push_str("  (nothing of interest)\n");
        }
        if dlg.sheet_button {
            out.push_str("  [sheet] Open Character Sheet\n");
        }
        out.push_str("Use 'use <number>' to pick an item.");
        out
    }

    fn do_use(&mut self, rest: &str) -> InteractResult<String> {
        let Some(mut dlg) = self.dialog.take() else {
            return Ok("No interaction dialog is open (try 'open <token>').".to_string());
        };

        let Some(index) = rest.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            self.dialog = Some(dlg);
            return Ok("usage: use <number>".to_string());
        };
        let Some(entry) = dlg.entry(index) else {
            let count = dlg.entries.len();
            self.dialog = Some(dlg);
            return Ok(format!("Pick an item between 1 and {count}."));
        };
        let item = entry.item;

        let executions_before = self.macros.executions().len();
        let outcome = dialog::click_entry(&mut self.ctx(), &mut dlg, item);
        let open = dlg.is_open();
        if open {
            self.dialog = Some(dlg);
        }

        match outcome? {
            EntryOutcome::Used { message, closed } => {
                self.last_card = Some(message);
                let mut out = self
                    .chat
                    .message(message)
                    .map(|m| m.card.to_string())
                    .unwrap_or_default();
                if let Some(execution) = self.macros.executions().get(executions_before) {
                    let body = self
                        .macros
                        .body(&execution.macro_name)
                        .unwrap_or_default()
                        .to_string();
                    out.push_str(&format!("\nMacro '{}': {body}", execution.macro_name));
                }
                if closed {
                    out.push_str("\n(The dialog closes.)");
                }
                Ok(out)
            }
            EntryOutcome::NoInteractor => {
                let warnings = self.notices.drain();
                Ok(warnings.join("\n"))
            }
        }
    }

    fn do_card_action(&mut self, cmd: &str, rest: &str) -> InteractResult<String> {
        let Some(action) = CardAction::parse(cmd) else {
            return Ok(format!("Unknown action: {cmd}"));
        };
        let Some(message) = self.last_card else {
            return Ok("No item card to act on (use an item first).".to_string());
        };

        let pointer = if action == CardAction::Damage && rest.eq_ignore_ascii_case("crit") {
            CLICK.with_alt()
        } else {
            CLICK
        };

        let outcome = dialog::handle_card_action(&mut self.ctx(), message, action, &pointer)?;
        match outcome {
            CardOutcome::Handled(DispatchOutcome::Rolled(result)) => Ok(self
                .chat
                .message(result)
                .map(|m| m.card.to_string())
                .unwrap_or_default()),
            CardOutcome::Handled(DispatchOutcome::Cancelled) => {
                Ok("Attack cancelled; the borrowed item is returned.".to_string())
            }
            CardOutcome::Default => Ok("That card has no interaction data.".to_string()),
        }
    }

    fn do_sheet(&mut self) -> String {
        let Some(dlg) = &self.dialog else {
            return "No interaction dialog is open.".to_string();
        };
        if !dlg.sheet_button {
            return "Only the GM can open the sheet from here.".to_string();
        }
        let environment = dlg.environment;
        self.open_sheet(environment)
    }

    fn do_chat(&self) -> String {
        if self.chat.is_empty() {
            return "Chat is empty.".to_string();
        }
        let cards: Vec<String> = self
            .chat
            .messages()
            .iter()
            .map(|m| m.card.to_string())
            .collect();
        cards.join("\n---\n")
    }

    fn do_status(&self) -> String {
        let selected = self
            .selection
            .first()
            .and_then(|id| self.scene.token(id))
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "nothing".to_string());
        let dialog = match &self.dialog {
            Some(dlg) if dlg.is_open() => "open",
            _ => "closed",
        };
        format!(
            "Scene: {}\nUser: {}{}\nSelected: {selected}\nDialog: {dialog}\nChat: {} messages",
            self.scene.name,
            self.user.name,
            if self.user.gm { " (GM)" } else { "" },
            self.chat.len(),
        )
    }

    fn help() -> &'static str {
        "\
Commands:
  tokens            List tokens ('*' marks your selection)
  select <token>    Select your acting token
  open <token>      Double-click a token (sheet or interaction dialog)
  use <number>      Use an item from the open dialog
  attack            Click the card's attack button
  damage [crit]     Click the card's damage button (crit doubles dice)
  check             Click the card's ability-check button
  save              Click the card's saving-throw button
  sheet             GM: open the environment's sheet from the dialog
  chat              Show the chat transcript
  status            Show session status
  help              Show this help
  quit              Exit"
    }
}
