use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use truhe_interact::{ConfirmPrompt, ConfirmRequest, InteractConfig, User};

use crate::session::PlaySession;

/// Confirmation prompt answering from standard input.
struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, request: &ConfirmRequest) -> Option<bool> {
        print!("{}: {} [y/n/c] ", request.title, request.prompt);
        if io::stdout().flush().is_err() {
            return None;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return None;
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        }
    }
}

/// Run the interactive play session.
pub fn run(
    scene_path: &Path,
    user: &str,
    gm: bool,
    seed: u64,
    no_auto_close: bool,
    ask_proficiency: bool,
) -> Result<(), String> {
    let scene = super::load_scene(scene_path)?;
    let user = if gm { User::gm(user) } else { User::new(user) };
    let config = InteractConfig::default()
        .with_seed(seed)
        .with_auto_close(!no_auto_close)
        .with_auto_proficiency(!ask_proficiency);

    println!(
        "  {} '{}' as {}{}",
        "Entering".bold(),
        scene.name,
        user.name,
        if user.gm { " (GM)" } else { "" }
    );
    println!("  Seed: {seed}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let mut session = PlaySession::new(scene, user, config, Box::new(StdinPrompt));

    // The confirmation prompt reads stdin too, so the lock is taken per
    // line rather than held across process().
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
