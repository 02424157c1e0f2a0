//! Render a story's location graph as indented ASCII, one node per
//! location with its exits, blocks, and items.

use tv_core::World;

pub fn run(story: &str) -> Result<(), String> {
    let world = super::build_story(story)?;

    println!("  Map for: {story}");
    println!();
    render_map(&world);

    Ok(())
}

fn render_map(world: &World) {
    let mut location_count = 0;
    let mut exit_count = 0;

    for (id, location) in world.locations() {
        location_count += 1;

        let start_marker = if id == world.current() { " (start)" } else { "" };
        println!("  [{}]{start_marker}", location.name);

        for (direction, exit) in location.exits() {
            exit_count += 1;
            let destination = match world.location(exit.to) {
                Some(l) => l.name.as_str(),
                None => "?",
            };
            let barred = match location.block(direction) {
                Some(_) if world.is_blocked(id, direction) => " [blocked]",
                Some(_) => " [block, open]",
                None => "",
            };
            println!("    --{}--> [{destination}]{barred}", direction.name());
        }

        for item in location.items() {
            let kind = if item.gettable { "item" } else { "scenery" };
            println!("    * {} ({kind})", item.name);
        }
    }

    println!();
    println!("  {location_count} locations, {exit_count} exits");
}
