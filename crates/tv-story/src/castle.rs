//! The castle adventure: the pond map extended north along a winding path
//! to a drawbridge guarded by a troll. Feed the troll a fish to pass, or
//! hit it with a branch and learn why not.

use tv_core::{Direction, Effect, EngineResult, Item, Location, Precondition, World};

use crate::pond;

/// Build the castle world with the player starting in the cottage.
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
    let winding_path = world.add_location(Location::new(
        "Winding Path",
        "You are walking along a winding path that leads south and east. \
         There is a tall tree here.",
    ));
    let tree = world.add_location(Location::new(
        "A Tall Tree",
        "You are at the top of a tall tree. From your perch you can see \
         the tower of Action Castle.",
    ));
    let drawbridge = world.add_location(Location::new(
        "Drawbridge",
        "You come to the drawbridge of Action Castle.",
    ));
    let courtyard = world.add_location(Location::new(
        "Courtyard",
        "You are in the courtyard of Action Castle. A castle guard stands watch \
         to the east. Stairs lead up into the tower and down into darkness.",
    ));

    world.connect(cottage, Direction::Out, garden_path)?;
    world.connect(garden_path, Direction::West, cliff)?;
    world.connect(garden_path, Direction::South, fishing_pond)?;
    world.connect(garden_path, Direction::North, winding_path)?;
    world.connect(winding_path, Direction::Up, tree)?;
    world.connect(winding_path, Direction::East, drawbridge)?;
    world.connect(drawbridge, Direction::East, courtyard)?;

    world.place_item(cottage, pond::fishing_pole())?;
    world.place_item(cottage, pond::potion())?;
    world.place_item(garden_path, pond::rosebush())?;
    world.place_item(fishing_pond, pond::pond_scenery())?;
    world.place_item(tree, branch())?;
    world.place_item(drawbridge, troll())?;

    world.add_block(
        drawbridge,
        Direction::East,
        "There is a troll blocking the bridge. The troll has a warty green hide \
         and looks hungry.",
        vec![Precondition::BlockGone {
            item: "troll".to_string(),
        }],
    )?;

    Ok(world)
}

fn branch() -> Item {
    Item::new("branch", "a dead branch").with_examine("IT COULD MAKE A GOOD CLUB.")
}

fn troll() -> Item {
    let mut troll = Item::scenery("troll", "a mean troll").with_examine("HE LOOKS ANGRY!");
    troll.add_guarded_action(
        "give troll a fish",
        Effect::Sequence(vec![
            Effect::Destroy {
                item: "fish".to_string(),
                text: "You give the troll a tasty fish.".to_string(),
            },
            Effect::Destroy {
                item: "troll".to_string(),
                text: "The troll runs off to eat his prize.".to_string(),
            },
        ]),
        vec![
            Precondition::InventoryContains {
                item: "fish".to_string(),
            },
            Precondition::LocationHasItem {
                item: "troll".to_string(),
            },
        ],
    );
    troll.add_action(
        "hit troll with branch",
        Effect::EndGame {
            message: "Not a good idea! The troll rips you limb from limb! THE END.".to_string(),
        },
    );
    troll
}
