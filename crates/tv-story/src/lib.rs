//! Bundled adventures, assembled against the `tv-core` engine.
//!
//! Each story module exposes a `build` function returning a ready-to-play
//! [`World`]. The registry here maps story names to builders so front ends
//! can offer them by name.

use tv_core::{EngineResult, World};

pub mod castle;
pub mod pond;

/// A bundled story: its registry name and a one-line summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryInfo {
    /// Name used to select the story.
    pub name: &'static str,
    /// Short summary for listings.
    pub summary: &'static str,
}

/// All bundled stories, in recommended play order.
pub fn available() -> &'static [StoryInfo] {
    &[
        StoryInfo {
            name: "pond",
            summary: "A quiet cottage, a fishing pond, and one very steep cliff.",
        },
        StoryInfo {
            name: "castle",
            summary: "The pond adventure, extended north to a troll-guarded castle.",
        },
    ]
}

/// Build a bundled story by name. Unknown names return `None`.
pub fn build(name: &str) -> Option<EngineResult<World>> {
    match name {
        "pond" => Some(pond::build()),
        "castle" => Some(castle::build()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_story_builds() {
        for info in available() {
            let world = build(info.name);
            assert!(world.is_some(), "story {} missing from build()", info.name);
            assert!(world.unwrap().is_ok(), "story {} failed to build", info.name);
        }
    }

    #[test]
    fn unknown_story_is_none() {
        assert!(build("labyrinth").is_none());
    }
}
