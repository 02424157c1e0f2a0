//! Actions bound to items, and the effect primitives they apply.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::precondition::{self, Precondition};
use crate::world::World;

/// A trigger phrase bound to an effect and the preconditions guarding it.
/// Stored in the owning item's registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// The exact phrase that invokes this action, matched
    /// case-insensitively against the full command.
    pub trigger: String,
    /// What happens when the preconditions hold.
    pub effect: Effect,
    /// Checks that must all pass before the effect runs.
    pub preconditions: Vec<Precondition>,
}

impl Action {
    /// Evaluate the preconditions and, when satisfied, apply the effect.
    ///
    /// Unmet preconditions push every failure reason and leave the world
    /// untouched. Returns true if the action ends the game.
    pub fn invoke(&self, world: &mut World, out: &mut Vec<String>) -> bool {
        let outcome = precondition::evaluate(&self.preconditions, world);
        if !outcome.satisfied {
            out.extend(outcome.failures);
            return false;
        }
        self.effect.apply(world, out)
    }
}

/// A small composable world mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Put an item into the player's inventory, once. Re-running reports
    /// the already-done message instead of adding a second copy.
    AddToInventory {
        /// The item to create and hand over.
        item: Box<Item>,
        /// Message on success.
        text: String,
        /// Message when the item is already held.
        already_done: String,
    },
    /// Remove the named item from whichever container currently holds it.
    /// If it exists nowhere, the effect is a no-op with a fallback line.
    Destroy {
        /// Item name.
        item: String,
        /// Message on successful destruction.
        text: String,
    },
    /// Print a piece of descriptive text.
    Describe {
        /// The text to show.
        text: String,
    },
    /// End the game with a closing message.
    EndGame {
        /// The closing message.
        message: String,
    },
    /// Run effects in order, stopping at and propagating the first one
    /// that ends the game.
    Sequence(Vec<Effect>),
}

impl Effect {
    /// Apply this effect to the world, appending feedback lines to `out`.
    /// Returns true if the game should end.
    pub fn apply(&self, world: &mut World, out: &mut Vec<String>) -> bool {
        match self {
            Self::AddToInventory {
                item,
                text,
                already_done,
            } => {
                if world.is_in_inventory(&item.name) {
                    out.push(already_done.clone());
                } else {
                    out.push(text.clone());
                    world.add_to_inventory((**item).clone());
                }
                false
            }
            Self::Destroy { item, text } => {
                match world.destroy_item(item) {
                    Ok(_) => {
                        if !text.is_empty() {
                            out.push(text.clone());
                        }
                    }
                    // Already gone from every container: report and move on.
                    Err(_) => out.push(format!("The {item} is already gone.")),
                }
                false
            }
            Self::Describe { text } => {
                out.push(text.clone());
                false
            }
            Self::EndGame { message } => {
                out.push(message.clone());
                true
            }
            Self::Sequence(effects) => {
                for effect in effects {
                    if effect.apply(world, out) {
                        return true;
                    }
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    fn garden_world() -> World {
        World::new(Location::new(
            "Garden Path",
            "You are standing on a lush garden path.",
        ))
    }

    fn pick_rose() -> Effect {
        Effect::AddToInventory {
            item: Box::new(Item::new("rose", "a red rose")),
            text: "You pick the lone rose from the rosebush.".to_string(),
            already_done: "You already picked the rose.".to_string(),
        }
    }

    #[test]
    fn add_to_inventory_is_idempotent() {
        let mut world = garden_world();
        let mut out = Vec::new();

        assert!(!pick_rose().apply(&mut world, &mut out));
        assert!(world.is_in_inventory("rose"));
        assert_eq!(out, ["You pick the lone rose from the rosebush."]);

        out.clear();
        assert!(!pick_rose().apply(&mut world, &mut out));
        assert_eq!(out, ["You already picked the rose."]);
        assert_eq!(world.inventory().count(), 1);
    }

    #[test]
    fn destroy_missing_item_is_a_reported_no_op() {
        let mut world = garden_world();
        let mut out = Vec::new();
        let effect = Effect::Destroy {
            item: "fish".to_string(),
            text: "You give the troll a tasty fish.".to_string(),
        };

        assert!(!effect.apply(&mut world, &mut out));
        assert_eq!(out, ["The fish is already gone."]);
    }

    #[test]
    fn end_game_signals_the_end() {
        let mut world = garden_world();
        let mut out = Vec::new();
        let effect = Effect::EndGame {
            message: "THE END.".to_string(),
        };
        assert!(effect.apply(&mut world, &mut out));
        assert_eq!(out, ["THE END."]);
    }

    #[test]
    fn sequence_stops_at_first_ending_effect() {
        let mut world = garden_world();
        world.add_to_inventory(Item::new("fish", "a dead fish"));
        let mut out = Vec::new();

        let effect = Effect::Sequence(vec![
            Effect::Destroy {
                item: "fish".to_string(),
                text: "The fish is gone.".to_string(),
            },
            Effect::EndGame {
                message: "THE END.".to_string(),
            },
            Effect::Describe {
                text: "Never printed.".to_string(),
            },
        ]);

        assert!(effect.apply(&mut world, &mut out));
        assert_eq!(out, ["The fish is gone.", "THE END."]);
        assert!(!world.is_in_inventory("fish"));
    }

    #[test]
    fn unmet_preconditions_block_the_effect() {
        let mut world = garden_world();
        let mut out = Vec::new();
        let action = Action {
            trigger: "catch fish with pole".to_string(),
            effect: Effect::AddToInventory {
                item: Box::new(Item::new("fish", "a dead fish")),
                text: "You catch a fish.".to_string(),
                already_done: "No more fish.".to_string(),
            },
            preconditions: vec![Precondition::InventoryContains {
                item: "pole".to_string(),
            }],
        };

        assert!(!action.invoke(&mut world, &mut out));
        assert_eq!(out, ["You don't have the pole"]);
        assert!(!world.is_in_inventory("fish"));
    }
}
