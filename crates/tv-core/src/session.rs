//! The command interpreter: classifies raw player input into an intent and
//! dispatches to a handler that mutates the world and produces feedback.
//!
//! One command is fully processed, including comma-separated sub-commands
//! and chained action effects, before the next is accepted. The
//! surrounding loop only reads input, prints [`Response::text`], and stops
//! when [`Response::ended`] is true or the player asks to quit.

use crate::history::History;
use crate::location::Direction;
use crate::matching;
use crate::world::World;

/// Outcome of one submitted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Player-facing feedback, possibly several lines.
    pub text: String,
    /// True when this command ended the game.
    pub ended: bool,
}

/// The classified purpose of a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A comma-separated batch of commands.
    Sequence,
    /// Movement in a direction or through a named exit.
    Direction(Direction),
    /// Re-describe the current location.
    Redescribe,
    /// Examine an item in scope.
    Examine,
    /// Pick up an item.
    Take,
    /// Drop a held item.
    Drop,
    /// List the inventory.
    Inventory,
    /// An exact trigger phrase registered on an item in scope.
    Special(String),
    /// Nothing matched.
    Unrecognized,
}

/// An interactive session: a world plus the interpreter state around it.
pub struct Session {
    world: World,
    history: History,
    show_triggers: bool,
}

impl Session {
    /// Start a session. The starting location is marked visited.
    pub fn new(world: World) -> Self {
        let mut world = world;
        world.move_to(world.current());
        Self {
            world,
            history: History::new(),
            show_triggers: true,
        }
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The log of submitted commands.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Toggle the per-item trigger hints in location descriptions.
    /// On by default; helpful for debugging and novice players.
    pub fn show_trigger_hints(&mut self, show: bool) {
        self.show_triggers = show;
    }

    /// Process one line of player input.
    ///
    /// Every submitted line is recorded in the history, including sequence
    /// segments, which re-enter here individually.
    pub fn parse_command(&mut self, input: &str) -> Response {
        self.history.record(input);
        let command = input.trim().to_lowercase();

        let mut lines = Vec::new();
        let ended = self.dispatch(&command, &mut lines);
        Response {
            text: lines.join("\n"),
            ended,
        }
    }

    /// Classify a command without executing it. Checks run in fixed
    /// priority order; the first match wins.
    pub fn classify(&self, command: &str) -> Intent {
        let command = command.trim().to_lowercase();

        if command.contains(',') {
            return Intent::Sequence;
        }
        if let Some(direction) = self.resolve_direction(&command) {
            return Intent::Direction(direction);
        }
        if command == "look" || command == "l" {
            return Intent::Redescribe;
        }
        if command.contains("examine") || command.starts_with("x ") {
            return Intent::Examine;
        }
        if command.contains("take ") || command.contains("get ") {
            return Intent::Take;
        }
        if command.contains("drop ") {
            return Intent::Drop;
        }
        if command.contains("inventory") || command == "i" {
            return Intent::Inventory;
        }
        for item in self.world.items_in_scope() {
            for trigger in item.triggers() {
                if matching::is_phrase(&command, trigger) {
                    return Intent::Special(trigger.to_string());
                }
            }
        }
        Intent::Unrecognized
    }

    fn dispatch(&mut self, command: &str, lines: &mut Vec<String>) -> bool {
        match self.classify(command) {
            Intent::Sequence => self.execute_sequence(command, lines),
            Intent::Direction(direction) => self.go_in_direction(&direction, lines),
            Intent::Redescribe => {
                lines.push(self.describe());
                false
            }
            Intent::Examine => {
                self.examine(command, lines);
                false
            }
            Intent::Take => self.take(command, lines),
            Intent::Drop => {
                self.drop_item(command, lines);
                false
            }
            Intent::Inventory => {
                self.check_inventory(lines);
                false
            }
            Intent::Special(trigger) => self.run_special(&trigger, lines),
            Intent::Unrecognized => {
                lines.push("I'm not sure what you want to do.".to_string());
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Intent handlers
    // -----------------------------------------------------------------------

    /// Each comma-separated segment re-enters the interpreter in order.
    /// Execution stops at the first segment that ends the game.
    fn execute_sequence(&mut self, command: &str, lines: &mut Vec<String>) -> bool {
        for segment in command.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let response = self.parse_command(segment);
            if !response.text.is_empty() {
                lines.push(response.text);
            }
            if response.ended {
                return true;
            }
        }
        false
    }

    /// Resolve a direction from the command: exact short codes and
    /// canonical-name substrings first, then "go out"/"go in" prefixes,
    /// then the current location's declared exits by name or "go <exit>".
    fn resolve_direction(&self, command: &str) -> Option<Direction> {
        if command == "n" || command.contains("north") {
            return Some(Direction::North);
        }
        if command == "s" || command.contains("south") {
            return Some(Direction::South);
        }
        if command == "e" || command.contains("east") {
            return Some(Direction::East);
        }
        if command == "w" || command.contains("west") {
            return Some(Direction::West);
        }
        if command == "up" {
            return Some(Direction::Up);
        }
        if command == "down" {
            return Some(Direction::Down);
        }
        if command.starts_with("go out") {
            return Some(Direction::Out);
        }
        if command.starts_with("go in") {
            return Some(Direction::In);
        }
        for (direction, _) in self.world.current_location().exits() {
            if command == direction.name() || command == format!("go {}", direction.name()) {
                return Some(direction.clone());
            }
        }
        None
    }

    fn go_in_direction(&mut self, direction: &Direction, lines: &mut Vec<String>) -> bool {
        let current = self.world.current();
        let Some(exit) = self.world.current_location().exit(direction) else {
            lines.push(format!(
                "You can't go {} from here.",
                direction.capitalized()
            ));
            return false;
        };
        let destination = exit.to;
        let travel = exit.travel_description.clone();

        if self.world.is_blocked(current, direction) {
            if let Some(description) = self.world.block_description(current, direction) {
                lines.push(description.to_string());
            }
            return false;
        }

        if !travel.is_empty() {
            lines.push(travel);
        }
        self.world.move_to(destination);

        // Entering an ending location describes only the location itself,
        // without items or exits.
        if self.world.current_location().end_game {
            lines.push(self.world.current_location().description.clone());
        } else {
            lines.push(self.describe());
        }
        self.world.current_location().end_game
    }

    fn examine(&self, command: &str, lines: &mut Vec<String>) {
        for item in self.world.items_in_scope() {
            if matching::mentions(command, &item.name) {
                if item.examine_text.is_empty() {
                    break;
                }
                lines.push(item.examine_text.clone());
                return;
            }
        }
        lines.push("You don't see anything special.".to_string());
    }

    fn take(&mut self, command: &str, lines: &mut Vec<String>) -> bool {
        let found = self
            .world
            .current_location()
            .items()
            .find(|item| matching::mentions(command, &item.name))
            .map(|item| (item.name.clone(), item.gettable));

        if let Some((name, gettable)) = found {
            if !gettable {
                lines.push(format!("You cannot take the {name}."));
                return false;
            }
            // Remove-then-insert: the item never dangles between containers.
            let item = match self.world.current_location_mut().remove_item(&name) {
                Ok(item) => item,
                Err(err) => {
                    lines.push(err.to_string());
                    return false;
                }
            };
            lines.push(item.take_text());
            let ended = item.end_game;
            self.world.add_to_inventory(item);
            return ended;
        }

        if let Some(item) = self
            .world
            .inventory()
            .find(|item| matching::mentions(command, &item.name))
        {
            lines.push(format!("You already have the {}.", item.name));
            return false;
        }

        lines.push("You can't find it.".to_string());
        false
    }

    fn drop_item(&mut self, command: &str, lines: &mut Vec<String>) {
        let found = self
            .world
            .inventory()
            .find(|item| matching::mentions(command, &item.name))
            .map(|item| item.name.clone());

        match found {
            Some(name) => match self.world.remove_from_inventory(&name) {
                Ok(item) => {
                    lines.push(format!("You drop the {name}."));
                    self.world.current_location_mut().add_item(item);
                }
                Err(err) => lines.push(err.to_string()),
            },
            None => lines.push("You don't have that.".to_string()),
        }
    }

    fn check_inventory(&self, lines: &mut Vec<String>) {
        let descriptions: Vec<&str> = self
            .world
            .inventory()
            .map(|item| item.description.as_str())
            .collect();
        if descriptions.is_empty() {
            lines.push("You don't have anything.".to_string());
        } else {
            lines.push(format!("You have: {}", descriptions.join(", ")));
        }
    }

    fn run_special(&mut self, trigger: &str, lines: &mut Vec<String>) -> bool {
        // The action is cloned out of the owning item so its effect can
        // mutate the world that item lives in.
        let action = self
            .world
            .items_in_scope()
            .iter()
            .find_map(|item| item.action(trigger))
            .cloned();

        match action {
            Some(action) => action.invoke(&mut self.world, lines),
            None => {
                // Dispatch raced a world mutation; degrade, don't crash.
                lines.push(format!("Cannot perform the action \"{trigger}\"."));
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Describing
    // -----------------------------------------------------------------------

    /// Describe the current location: its text, the items here with their
    /// trigger hints, and the exits.
    pub fn describe(&self) -> String {
        let location = self.world.current_location();
        let mut out = vec![location.description.clone()];

        if location.items().next().is_some() {
            out.push("You see:".to_string());
            for item in location.items() {
                out.push(item.description.clone());
                if self.show_triggers {
                    for trigger in item.triggers() {
                        out.push(format!("\t{trigger}"));
                    }
                }
            }
        }

        let exits: Vec<String> = location
            .exits()
            .map(|(direction, _)| direction.capitalized())
            .collect();
        if !exits.is_empty() {
            out.push(format!("Exits: {}", exits.join(", ")));
        }

        out.join("\n")
    }
}
