pub mod export;
pub mod map;
pub mod play;
pub mod stories;

use tv_core::World;

/// Build a bundled story by name, with a helpful error for unknown names.
fn build_story(name: &str) -> Result<World, String> {
    match tv_story::build(name) {
        Some(Ok(world)) => Ok(world),
        Some(Err(e)) => Err(format!("story \"{name}\" failed to build: {e}")),
        None => {
            let names: Vec<&str> = tv_story::available().iter().map(|s| s.name).collect();
            Err(format!(
                "unknown story: \"{name}\". Available: {}",
                names.join(", ")
            ))
        }
    }
}
