//! Declarative checks evaluated against current world state.
//!
//! Preconditions guard both item actions and directional blocks. They are
//! a closed enum rather than string-keyed checks: extension happens by
//! adding a variant and its arm in [`Precondition::check`].

use serde::{Deserialize, Serialize};

use crate::location::LocationId;
use crate::world::World;

/// A single named check against world state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precondition {
    /// The player is carrying the named item.
    InventoryContains {
        /// Item name.
        item: String,
    },
    /// The player is standing at the given location.
    InLocation {
        /// Location index.
        location: LocationId,
    },
    /// The named item is present at the player's current location.
    LocationHasItem {
        /// Item name.
        item: String,
    },
    /// The named item exists in no container any more — it has been
    /// destroyed. Used by blocks that open once an obstacle item is gone.
    BlockGone {
        /// Item name.
        item: String,
    },
}

impl Precondition {
    /// Evaluate this check. `Err` carries the player-facing failure reason.
    pub fn check(&self, world: &World) -> Result<(), String> {
        match self {
            Self::InventoryContains { item } => {
                if world.is_in_inventory(item) {
                    Ok(())
                } else {
                    Err(format!("You don't have the {item}"))
                }
            }
            Self::InLocation { location } => {
                if world.current() == *location {
                    Ok(())
                } else {
                    Err("You aren't in the right location".to_string())
                }
            }
            Self::LocationHasItem { item } => {
                if world.current_location().has_item(item) {
                    Ok(())
                } else {
                    Err(format!("The {item} isn't in this location"))
                }
            }
            Self::BlockGone { item } => {
                if world.item_exists(item) {
                    Err(format!("The {item} is still here"))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// The outcome of evaluating a set of preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// True when every check passed.
    pub satisfied: bool,
    /// Every failure reason, in declaration order.
    pub failures: Vec<String>,
}

/// Evaluate every precondition in the set, without short-circuiting, so
/// the player sees all unmet requirements at once.
pub fn evaluate(preconditions: &[Precondition], world: &World) -> Evaluation {
    let failures: Vec<String> = preconditions
        .iter()
        .filter_map(|p| p.check(world).err())
        .collect();
    Evaluation {
        satisfied: failures.is_empty(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::location::Location;

    fn pond_world() -> World {
        let mut world = World::new(Location::new(
            "Fishing Pond",
            "You are at the edge of a small fishing pond.",
        ));
        let start = world.current();
        world
            .place_item(start, Item::scenery("pond", "a small fishing pond"))
            .unwrap();
        world
    }

    #[test]
    fn inventory_contains_reports_missing_item() {
        let world = pond_world();
        let check = Precondition::InventoryContains {
            item: "pole".to_string(),
        };
        assert_eq!(
            check.check(&world),
            Err("You don't have the pole".to_string())
        );
    }

    #[test]
    fn inventory_contains_passes_once_held() {
        let mut world = pond_world();
        world.add_to_inventory(Item::new("pole", "a fishing pole"));
        let check = Precondition::InventoryContains {
            item: "pole".to_string(),
        };
        assert_eq!(check.check(&world), Ok(()));
    }

    #[test]
    fn in_location_tracks_the_player_position() {
        let mut world = pond_world();
        let pond = world.current();
        let cottage = world.add_location(Location::new("Cottage", "A small cottage."));

        let at_pond = Precondition::InLocation { location: pond };
        let at_cottage = Precondition::InLocation { location: cottage };
        assert_eq!(at_pond.check(&world), Ok(()));
        assert_eq!(
            at_cottage.check(&world),
            Err("You aren't in the right location".to_string())
        );

        world.move_to(cottage);
        assert!(at_cottage.check(&world).is_ok());
    }

    #[test]
    fn location_has_item() {
        let world = pond_world();
        let here = Precondition::LocationHasItem {
            item: "pond".to_string(),
        };
        let absent = Precondition::LocationHasItem {
            item: "troll".to_string(),
        };
        assert!(here.check(&world).is_ok());
        assert!(absent.check(&world).is_err());
    }

    #[test]
    fn block_gone_tracks_destruction() {
        let mut world = pond_world();
        let check = Precondition::BlockGone {
            item: "pond".to_string(),
        };
        assert!(check.check(&world).is_err());

        world.destroy_item("pond").unwrap();
        assert!(check.check(&world).is_ok());
    }

    #[test]
    fn all_failures_are_reported_at_once() {
        let world = pond_world();
        let outcome = evaluate(
            &[
                Precondition::InventoryContains {
                    item: "pole".to_string(),
                },
                Precondition::InventoryContains {
                    item: "net".to_string(),
                },
            ],
            &world,
        );
        assert!(!outcome.satisfied);
        assert_eq!(
            outcome.failures,
            ["You don't have the pole", "You don't have the net"]
        );
    }

    #[test]
    fn empty_set_is_satisfied() {
        let world = pond_world();
        assert!(evaluate(&[], &world).satisfied);
    }
}
