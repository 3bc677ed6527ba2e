//! Macro registry for loot items.
//!
//! A loot item may name a macro that runs when the item is taken, with the
//! interacting actor and token bound as context. Unknown names are reported
//! as errors rather than silently ignored.

use std::collections::HashMap;

use truhe_core::{ActorId, TokenId};

use crate::error::{InteractError, InteractResult};

/// A recorded macro execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroExecution {
    /// Name of the macro that ran.
    pub macro_name: String,
    /// The actor bound as context.
    pub actor: ActorId,
    /// The token bound as context.
    pub token: TokenId,
}

/// Named macros and a log of their executions.
#[derive(Debug, Default)]
pub struct Macros {
    defs: HashMap<String, String>,
    executions: Vec<MacroExecution>,
}

impl Macros {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a macro body under a name.
    pub fn register(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.defs.insert(name.into(), body.into());
    }

    /// Whether a macro with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    /// The body registered under a name, if any.
    pub fn body(&self, name: &str) -> Option<&str> {
        self.defs.get(name).map(String::as_str)
    }

    /// Run a macro with the given actor and token bound, returning its body.
    pub fn run(&mut self, name: &str, actor: ActorId, token: TokenId) -> InteractResult<&str> {
        if !self.defs.contains_key(name) {
            return Err(InteractError::UnknownMacro(name.to_string()));
        }
        self.executions.push(MacroExecution {
            macro_name: name.to_string(),
            actor,
            token,
        });
        Ok(&self.defs[name])
    }

    /// All recorded executions, in order.
    pub fn executions(&self) -> &[MacroExecution] {
        &self.executions
    }

    /// How many times the named macro has run.
    pub fn execution_count(&self, name: &str) -> usize {
        self.executions
            .iter()
            .filter(|e| e.macro_name == name)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_registered_macro() {
        let mut macros = Macros::new();
        macros.register("open-chest", "The lid creaks open.");

        let actor = ActorId::new();
        let token = TokenId::new();
        let body = macros.run("open-chest", actor, token).unwrap();
        assert_eq!(body, "The lid creaks open.");
        assert_eq!(macros.execution_count("open-chest"), 1);
        assert_eq!(macros.executions()[0].actor, actor);
        assert_eq!(macros.executions()[0].token, token);
    }

    #[test]
    fn unknown_macro_is_an_error() {
        let mut macros = Macros::new();
        let result = macros.run("missing", ActorId::new(), TokenId::new());
        assert!(matches!(result, Err(InteractError::UnknownMacro(name)) if name == "missing"));
        assert!(macros.executions().is_empty());
    }
}
