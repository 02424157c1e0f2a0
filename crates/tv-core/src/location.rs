//! Locations and the directed graph connecting them.
//!
//! Locations live in the world's arena and refer to each other by
//! [`LocationId`] index, never by owning reference, so cyclic maps are
//! plain data. A [`Block`] is a conditional obstacle attached to one
//! outgoing direction, not a location itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::item::Item;
use crate::precondition::Precondition;

/// Index of a location in the world's location table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub(crate) usize);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A travel direction out of a location.
///
/// The eight canonical tokens form four symmetric axes; `Other` covers
/// story-specific exits ("follow the brick road") which have no automatic
/// reverse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
    /// In.
    In,
    /// Out.
    Out,
    /// A story-specific exit name.
    Other(String),
}

impl Direction {
    /// The reverse direction for the four paired axes. `None` for `Other`.
    pub fn opposite(&self) -> Option<Self> {
        match self {
            Self::North => Some(Self::South),
            Self::South => Some(Self::North),
            Self::East => Some(Self::West),
            Self::West => Some(Self::East),
            Self::Up => Some(Self::Down),
            Self::Down => Some(Self::Up),
            Self::In => Some(Self::Out),
            Self::Out => Some(Self::In),
            Self::Other(_) => None,
        }
    }

    /// The lowercase name of this direction.
    pub fn name(&self) -> &str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
            Self::Other(name) => name,
        }
    }

    /// The name with its first letter capitalized, for exit listings.
    pub fn capitalized(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A connection out of a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exit {
    /// The destination location.
    pub to: LocationId,
    /// Optional flavour text shown when travelling this way. Empty means
    /// no travel narration.
    pub travel_description: String,
}

/// A conditional obstacle on one direction out of a location.
///
/// The blocked exit opens once every precondition passes. When a move is
/// stopped, the block's description is emitted verbatim; the individual
/// failure reasons are not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// What the player sees when the way is barred.
    pub description: String,
    /// Checks that must all pass before the exit opens.
    pub preconditions: Vec<Precondition>,
}

/// A place the player can visit: a node in the world graph.
///
/// Structure is fixed after world assembly; only the visited flag and the
/// item set change during play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Unique short name.
    pub name: String,
    /// Description shown when the location is described.
    pub description: String,
    /// True if entering this location ends the game.
    pub end_game: bool,
    connections: Vec<(Direction, Exit)>,
    blocks: Vec<(Direction, Block)>,
    items: Vec<Item>,
    /// Set once the player first enters.
    pub visited: bool,
}

impl Location {
    /// Create a location.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            end_game: false,
            connections: Vec::new(),
            blocks: Vec::new(),
            items: Vec::new(),
            visited: false,
        }
    }

    /// Create a location that ends the game on entry.
    pub fn ending(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut location = Self::new(name, description);
        location.end_game = true;
        location
    }

    /// The destination in the given direction, if connected.
    pub fn connection(&self, direction: &Direction) -> Option<LocationId> {
        self.connections
            .iter()
            .find(|(d, _)| d == direction)
            .map(|(_, exit)| exit.to)
    }

    /// The exit record in the given direction, if connected.
    pub fn exit(&self, direction: &Direction) -> Option<&Exit> {
        self.connections
            .iter()
            .find(|(d, _)| d == direction)
            .map(|(_, exit)| exit)
    }

    /// All exits in declaration order.
    pub fn exits(&self) -> impl Iterator<Item = (&Direction, &Exit)> {
        self.connections.iter().map(|(d, e)| (d, e))
    }

    pub(crate) fn set_connection(&mut self, direction: Direction, exit: Exit) {
        match self.connections.iter_mut().find(|(d, _)| *d == direction) {
            Some((_, existing)) => *existing = exit,
            None => self.connections.push((direction, exit)),
        }
    }

    /// The block on the given direction, if any.
    pub fn block(&self, direction: &Direction) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|(d, _)| d == direction)
            .map(|(_, block)| block)
    }

    pub(crate) fn set_block(&mut self, direction: Direction, block: Block) {
        match self.blocks.iter_mut().find(|(d, _)| *d == direction) {
            Some((_, existing)) => *existing = block,
            None => self.blocks.push((direction, block)),
        }
    }

    /// Put an item in this location. An item with the same name is replaced,
    /// keeping names unique within the container.
    pub fn add_item(&mut self, item: Item) {
        match self.items.iter_mut().find(|i| i.name == item.name) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Remove an item by name, returning it. Removing an item that is not
    /// here is an error.
    pub fn remove_item(&mut self, name: &str) -> EngineResult<Item> {
        match self.items.iter().position(|i| i.name == name) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(EngineError::ItemNotFound(name.to_string())),
        }
    }

    /// Look up an item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Whether an item with this name is here.
    pub fn has_item(&self, name: &str) -> bool {
        self.item(name).is_some()
    }

    /// The items here, in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_are_symmetric() {
        let axes = [
            (Direction::North, Direction::South),
            (Direction::East, Direction::West),
            (Direction::Up, Direction::Down),
            (Direction::In, Direction::Out),
        ];
        for (a, b) in axes {
            assert_eq!(a.opposite(), Some(b.clone()));
            assert_eq!(b.opposite(), Some(a));
        }
        assert_eq!(Direction::Other("ford".to_string()).opposite(), None);
    }

    #[test]
    fn capitalized_names() {
        assert_eq!(Direction::North.capitalized(), "North");
        assert_eq!(
            Direction::Other("follow the road".to_string()).capitalized(),
            "Follow the road"
        );
    }

    #[test]
    fn item_names_stay_unique() {
        let mut cottage = Location::new("Cottage", "A small cottage.");
        cottage.add_item(Item::new("pole", "a fishing pole"));
        cottage.add_item(Item::new("pole", "a sturdier fishing pole"));

        assert_eq!(cottage.items().count(), 1);
        assert_eq!(
            cottage.item("pole").unwrap().description,
            "a sturdier fishing pole"
        );
    }

    #[test]
    fn remove_missing_item_is_an_error() {
        let mut cottage = Location::new("Cottage", "A small cottage.");
        assert!(cottage.remove_item("pole").is_err());
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut shed = Location::new("Shed", "A cluttered shed.");
        shed.add_item(Item::new("rake", "a rusty rake"));
        shed.add_item(Item::new("rope", "a coil of rope"));

        let names: Vec<&str> = shed.items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["rake", "rope"]);
    }
}
