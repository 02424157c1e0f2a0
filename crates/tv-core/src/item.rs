//! Items: objects the player can pick up, and scenery worth interacting
//! with. Each item carries its own action registry, mapping trigger
//! phrases to [`Action`]s.

use serde::{Deserialize, Serialize};

use crate::action::{Action, Effect};
use crate::precondition::Precondition;

/// An interactable object, owned by exactly one container at a time: a
/// location's item set or the player's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within any single container.
    pub name: String,
    /// Short description used in listings.
    pub description: String,
    /// Detailed text shown on examine. Empty means nothing special.
    pub examine_text: String,
    take_text: Option<String>,
    /// Whether the player can put this in their inventory.
    pub gettable: bool,
    /// True if taking this item ends the game.
    pub end_game: bool,
    actions: Vec<Action>,
}

impl Item {
    /// Create a gettable item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            examine_text: String::new(),
            take_text: None,
            gettable: true,
            end_game: false,
            actions: Vec::new(),
        }
    }

    /// Create scenery: an item that cannot be taken.
    pub fn scenery(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut item = Self::new(name, description);
        item.gettable = false;
        item
    }

    /// Set the examine text.
    pub fn with_examine(mut self, text: impl Into<String>) -> Self {
        self.examine_text = text.into();
        self
    }

    /// Override the default take message.
    pub fn with_take_text(mut self, text: impl Into<String>) -> Self {
        self.take_text = Some(text.into());
        self
    }

    /// Mark this item as ending the game when taken.
    pub fn ends_game(mut self) -> Self {
        self.end_game = true;
        self
    }

    /// The message shown when the player takes this item.
    pub fn take_text(&self) -> String {
        match &self.take_text {
            Some(text) => text.clone(),
            None => format!("You take the {}.", self.name),
        }
    }

    /// Register an unguarded action under a trigger phrase. A phrase
    /// registered twice keeps the later action.
    pub fn add_action(&mut self, trigger: impl Into<String>, effect: Effect) {
        self.add_guarded_action(trigger, effect, Vec::new());
    }

    /// Register an action whose effect only runs once every precondition
    /// passes.
    pub fn add_guarded_action(
        &mut self,
        trigger: impl Into<String>,
        effect: Effect,
        preconditions: Vec<Precondition>,
    ) {
        let action = Action {
            trigger: trigger.into(),
            effect,
            preconditions,
        };
        match self
            .actions
            .iter_mut()
            .find(|a| a.trigger.eq_ignore_ascii_case(&action.trigger))
        {
            Some(existing) => *existing = action,
            None => self.actions.push(action),
        }
    }

    /// The trigger phrases registered on this item, for hint listings.
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.trigger.as_str())
    }

    /// Look up an action by exact trigger phrase, case-insensitively.
    pub fn action(&self, trigger: &str) -> Option<&Action> {
        self.actions
            .iter()
            .find(|a| a.trigger.eq_ignore_ascii_case(trigger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_take_text_is_generated() {
        let pole = Item::new("pole", "a fishing pole");
        assert_eq!(pole.take_text(), "You take the pole.");
    }

    #[test]
    fn explicit_take_text_wins() {
        let potion = Item::new("potion", "a poisonous potion")
            .with_take_text("The fumes cause you to faint. THE END.")
            .ends_game();
        assert_eq!(potion.take_text(), "The fumes cause you to faint. THE END.");
        assert!(potion.end_game);
    }

    #[test]
    fn scenery_is_not_gettable() {
        let pond = Item::scenery("pond", "a small fishing pond");
        assert!(!pond.gettable);
    }

    #[test]
    fn trigger_lookup_is_case_insensitive() {
        let mut rose = Item::new("rose", "a red rose");
        rose.add_action(
            "smell rose",
            Effect::Describe {
                text: "It smells sweet.".to_string(),
            },
        );
        assert!(rose.action("Smell Rose").is_some());
        assert!(rose.action("smell flowers").is_none());
    }

    #[test]
    fn registering_one_trigger_leaves_others_alone() {
        let mut pond = Item::scenery("pond", "a small fishing pond");
        pond.add_action(
            "catch fish",
            Effect::Describe {
                text: "They are too fast.".to_string(),
            },
        );
        pond.add_action(
            "catch fish with pole",
            Effect::Describe {
                text: "You catch one.".to_string(),
            },
        );

        let triggers: Vec<&str> = pond.triggers().collect();
        assert_eq!(triggers, ["catch fish", "catch fish with pole"]);
        assert!(pond.action("catch fish").is_some());
        assert!(pond.action("catch fish with pole").is_some());
    }

    #[test]
    fn unknown_trigger_resolves_to_nothing() {
        let rose = Item::new("rose", "a red rose");
        assert!(rose.action("smell rose").is_none());
    }
}
