use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use truhe_interact::{build_display_list, catalog};

/// Show the ordered interaction catalog of an environment token.
pub fn run(scene_path: &Path, token_name: &str) -> Result<(), String> {
    let scene = super::load_scene(scene_path)?;

    let token = scene
        .token_by_name(token_name)
        .ok_or_else(|| format!("no token named '{token_name}' in scene"))?;
    if !token.environment {
        return Err(format!("'{}' is not an environment token", token.name));
    }

    let actor = scene
        .actor(token.actor)
        .ok_or_else(|| format!("token '{}' has no actor", token.name))?;
    let items = build_display_list(actor);

    if items.is_empty() {
        println!("  '{}' has nothing to interact with.", token.name);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Item", "Type", "Sort"]);

    for (index, item) in items.iter().enumerate() {
        let bucket = catalog::bucket_of(item)
            .map(|b| b.label().to_string())
            .unwrap_or_default();
        table.add_row(vec![
            &(index + 1).to_string(),
            &item.name,
            &bucket,
            &item.sort.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} items offered by '{}'", items.len(), token.name);

    Ok(())
}
