use std::path::Path;

use comfy_table::{ContentArrangement, Table};

/// List the tokens in a scene as a table.
pub fn run(scene_path: &Path) -> Result<(), String> {
    let scene = super::load_scene(scene_path)?;

    let mut tokens: Vec<_> = scene.tokens().collect();
    tokens.sort_by(|a, b| a.name.cmp(&b.name));

    if tokens.is_empty() {
        println!("  No tokens in scene.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Token", "Actor", "Environment", "Owners"]);

    for token in &tokens {
        let actor = scene
            .actor(token.actor)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| format!("<missing {}>", token.actor));
        let environment = if token.environment { "yes" } else { "" };
        let owners = token.owners.join(", ");
        table.add_row(vec![&token.name, &actor, &environment.to_string(), &owners]);
    }

    println!("{table}");
    println!();
    println!("  {} tokens in '{}'", tokens.len(), scene.name);

    Ok(())
}
