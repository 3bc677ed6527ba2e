pub mod init;
pub mod items;
pub mod play;
pub mod tokens;

use std::fs;
use std::path::Path;

use truhe_core::Scene;

/// Load a scene from a JSON file.
fn load_scene(path: &Path) -> Result<Scene, String> {
    let json =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Scene::from_json(&json).map_err(|e| format!("invalid scene file {}: {e}", path.display()))
}
