//! The fishing-pond adventure: a small tutorial-sized map around a
//! cottage. Win by catching and eating the fish; lose by walking off the
//! cliff or touching the potion.

use tv_core::{Direction, Effect, EngineResult, Item, Location, Precondition, World};

/// Build the pond world with the player starting in the cottage.
pub fn build() -> EngineResult<World> {
    let mut world = World::new(Location::new(
        "Cottage",
        "You are standing in a small cottage.",
    ));
    let cottage = world.current();
    let garden_path = world.add_location(Location::new(
        "Garden Path",
        "You are standing on a lush garden path. There is a cottage here.",
    ));
    let cliff = world.add_location(Location::ending(
        "Cliff",
        "There is a steep cliff here. You fall off the cliff and lose the game. THE END.",
    ));
    let fishing_pond = world.add_location(Location::new(
        "Fishing Pond",
        "You are at the edge of a small fishing pond.",
    ));

    world.connect(cottage, Direction::Out, garden_path)?;
    world.connect(garden_path, Direction::West, cliff)?;
    world.connect(garden_path, Direction::South, fishing_pond)?;

    world.place_item(cottage, fishing_pole())?;
    world.place_item(cottage, potion())?;
    world.place_item(garden_path, rosebush())?;
    world.place_item(fishing_pond, pond_scenery())?;

    Ok(world)
}

// ---------------------------------------------------------------------------
// Items shared with the castle story
// ---------------------------------------------------------------------------

pub(crate) fn fishing_pole() -> Item {
    Item::new("pole", "a fishing pole").with_examine("A SIMPLE FISHING POLE.")
}

pub(crate) fn potion() -> Item {
    Item::new("potion", "a poisonous potion")
        .with_examine("IT'S BRIGHT GREEN AND STEAMING.")
        .with_take_text(
            "As you near the potion, the fumes cause you to faint and lose the game. THE END.",
        )
        .ends_game()
}

pub(crate) fn rosebush() -> Item {
    let mut rose = Item::new("rose", "a red rose").with_examine("IT SMELLS GOOD.");
    rose.add_action(
        "smell rose",
        Effect::Describe {
            text: "It smells sweet.".to_string(),
        },
    );

    let mut rosebush = Item::new("rosebush", "a rosebush")
        .with_examine("THE ROSEBUSH CONTAINS A SINGLE RED ROSE.  IT IS BEAUTIFUL.");
    rosebush.add_action(
        "pick rose",
        Effect::AddToInventory {
            item: Box::new(rose),
            text: "You pick the lone rose from the rosebush.".to_string(),
            already_done: "You already picked the rose.".to_string(),
        },
    );
    rosebush
}

pub(crate) fn pond_scenery() -> Item {
    let mut fish = Item::new("fish", "a dead fish").with_examine("IT SMELLS TERRIBLE.");
    fish.add_action(
        "eat fish",
        Effect::EndGame {
            message: "That's disgusting! It's raw! And definitely not sashimi-grade! \
                      But you've won this version of the game. THE END."
                .to_string(),
        },
    );

    let mut pond =
        Item::scenery("pond", "a small fishing pond").with_examine("THERE ARE FISH IN THE POND.");
    pond.add_action(
        "catch fish",
        Effect::Describe {
            text: "You reach into the pond and try to catch a fish with your hands, \
                   but they are too fast."
                .to_string(),
        },
    );
    pond.add_guarded_action(
        "catch fish with pole",
        Effect::AddToInventory {
            item: Box::new(fish),
            text: "You dip your hook into the pond and catch a fish.".to_string(),
            already_done: "You weren't able to catch another fish.".to_string(),
        },
        vec![Precondition::InventoryContains {
            item: "pole".to_string(),
        }],
    );
    pond
}
