use std::fs;
use std::path::Path;

use truhe_core::{Ability, Actor, DiceExpr, Item, Scene, Token};

/// Build the sample scene written by `truhe init`.
///
/// A crypt with one environment chest (one item per catalog bucket) and two
/// player tokens, so every interaction path can be tried immediately.
pub fn sample_scene() -> Scene {
    let mut scene = Scene::new("Forgotten Crypt");

    let mut chest = Actor::new("Old Chest");
    chest.add_item(Item::weapon("Rusty Sword", 1, DiceExpr::new(1, 8, 0)).with_sort(1));
    chest.add_item(Item::weapon("Chipped Dagger", 0, DiceExpr::new(1, 4, 0)).with_sort(2));
    chest.add_item(Item::check("Dusty Tome", Ability::Intelligence));
    chest.add_item(Item::save("Poison Needle", Ability::Constitution));
    chest.add_item(Item::loot("Gold Pouch", Some("found-gold".to_string())));
    let chest_actor = scene.add_actor(chest).expect("fresh scene");

    let kara = Actor::new("Kara")
        .with_ability(Ability::Intelligence, 3)
        .with_ability(Ability::Constitution, 1);
    let kara_actor = scene.add_actor(kara).expect("fresh scene");

    let brynn = Actor::new("Brynn").with_ability(Ability::Dexterity, 2);
    let brynn_actor = scene.add_actor(brynn).expect("fresh scene");

    scene
        .add_token(Token::new("Old Chest", chest_actor).environment())
        .expect("fresh scene");
    scene
        .add_token(Token::new("Kara", kara_actor).owned_by("player"))
        .expect("fresh scene");
    scene
        .add_token(Token::new("Brynn", brynn_actor).owned_by("player"))
        .expect("fresh scene");

    scene
}

pub fn run(dir: &Path) -> Result<(), String> {
    if dir.exists() {
        return Err(format!("directory '{}' already exists", dir.display()));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;

    let scene = sample_scene();
    let json = scene
        .to_json()
        .map_err(|e| format!("cannot serialize scene: {e}"))?;
    fs::write(dir.join("scene.json"), json)
        .map_err(|e| format!("cannot write scene.json: {e}"))?;

    println!("Created scene '{}' in {}/", scene.name, dir.display());
    println!("  scene.json  — tokens, actors, and items");
    println!();
    println!("Get started:");
    println!("  truhe tokens {}/scene.json", dir.display());
    println!("  truhe items {}/scene.json \"Old Chest\"", dir.display());
    println!("  truhe play {}/scene.json", dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_scene_has_environment_chest() {
        let scene = sample_scene();
        let chest = scene.token_by_name("Old Chest").unwrap();
        assert!(chest.environment);
        assert_eq!(scene.actor_of(chest.id).unwrap().items.len(), 5);
    }

    #[test]
    fn sample_scene_round_trips() {
        let scene = sample_scene();
        let json = scene.to_json().unwrap();
        let loaded = Scene::from_json(&json).unwrap();
        assert!(loaded.token_by_name("Kara").unwrap().is_owner("player"));
    }
}
