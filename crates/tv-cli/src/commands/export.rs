use std::path::Path;

pub fn run(story: &str, output: Option<&Path>) -> Result<(), String> {
    let world = super::build_story(story)?;

    let content =
        serde_json::to_string_pretty(&world).map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
