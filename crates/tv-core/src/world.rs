//! The central world model. Owns the location arena, the player's
//! position, and the inventory.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::item::Item;
use crate::location::{Block, Direction, Exit, Location, LocationId};
use crate::precondition::{self, Precondition};

/// All mutable game state for one session.
///
/// Locations form a directed graph, possibly cyclic; nodes live in an
/// arena and refer to each other by [`LocationId`]. There is exactly one
/// instance per session and a single mutator (the interpreter), so no
/// locking is involved anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    locations: Vec<Location>,
    current: LocationId,
    inventory: Vec<Item>,
}

impl World {
    /// Create a world whose first location is the starting point.
    pub fn new(start: Location) -> Self {
        Self {
            locations: vec![start],
            current: LocationId(0),
            inventory: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Assembly
    // -----------------------------------------------------------------------

    /// Add a location to the arena, returning its index.
    pub fn add_location(&mut self, location: Location) -> LocationId {
        self.locations.push(location);
        LocationId(self.locations.len() - 1)
    }

    /// Connect `from` to `to` in the given direction with no travel
    /// description. For the four paired axes the reverse connection is
    /// auto-created unless one already exists.
    pub fn connect(
        &mut self,
        from: LocationId,
        direction: Direction,
        to: LocationId,
    ) -> EngineResult<()> {
        self.connect_described(from, direction, to, "")
    }

    /// Like [`World::connect`], with flavour text shown when travelling
    /// this way. The auto-created reverse connection gets an empty travel
    /// description.
    pub fn connect_described(
        &mut self,
        from: LocationId,
        direction: Direction,
        to: LocationId,
        travel_description: &str,
    ) -> EngineResult<()> {
        self.require(from)?;
        self.require(to)?;

        self.locations[from.0].set_connection(
            direction.clone(),
            Exit {
                to,
                travel_description: travel_description.to_string(),
            },
        );

        if let Some(reverse) = direction.opposite()
            && self.locations[to.0].connection(&reverse).is_none()
        {
            self.locations[to.0].set_connection(
                reverse,
                Exit {
                    to: from,
                    travel_description: String::new(),
                },
            );
        }
        Ok(())
    }

    /// Attach a block to one outgoing direction of a location.
    pub fn add_block(
        &mut self,
        at: LocationId,
        direction: Direction,
        description: impl Into<String>,
        preconditions: Vec<Precondition>,
    ) -> EngineResult<()> {
        self.require(at)?;
        self.locations[at.0].set_block(
            direction,
            Block {
                description: description.into(),
                preconditions,
            },
        );
        Ok(())
    }

    /// Place an item in a location.
    pub fn place_item(&mut self, at: LocationId, item: Item) -> EngineResult<()> {
        self.require(at)?;
        self.locations[at.0].add_item(item);
        Ok(())
    }

    fn require(&self, id: LocationId) -> EngineResult<()> {
        if id.0 < self.locations.len() {
            Ok(())
        } else {
            Err(EngineError::LocationNotFound(id))
        }
    }

    // -----------------------------------------------------------------------
    // Player position
    // -----------------------------------------------------------------------

    /// The player's current location index.
    pub fn current(&self) -> LocationId {
        self.current
    }

    /// The player's current location.
    pub fn current_location(&self) -> &Location {
        &self.locations[self.current.0]
    }

    /// Mutable access to the player's current location.
    pub fn current_location_mut(&mut self) -> &mut Location {
        &mut self.locations[self.current.0]
    }

    /// Move the player and mark the destination visited. Pure side effect:
    /// connectivity and blocks are the caller's job to check.
    pub fn move_to(&mut self, destination: LocationId) {
        self.current = destination;
        self.locations[self.current.0].visited = true;
    }

    /// Look up a location by index.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    /// All locations with their indices, in arena order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId(i), l))
    }

    // -----------------------------------------------------------------------
    // Blocks
    // -----------------------------------------------------------------------

    /// Whether the exit in `direction` out of `at` is currently barred.
    /// Preconditions are evaluated silently; an unblocked or unconnected
    /// direction is never barred.
    pub fn is_blocked(&self, at: LocationId, direction: &Direction) -> bool {
        let Some(location) = self.location(at) else {
            return false;
        };
        match location.block(direction) {
            Some(block) => !precondition::evaluate(&block.preconditions, self).satisfied,
            None => false,
        }
    }

    /// The block description for `direction` out of `at`, if a block is
    /// attached there (whether or not it is currently barring the way).
    pub fn block_description(&self, at: LocationId, direction: &Direction) -> Option<&str> {
        self.location(at)?
            .block(direction)
            .map(|b| b.description.as_str())
    }

    // -----------------------------------------------------------------------
    // Inventory
    // -----------------------------------------------------------------------

    /// Add an item to the inventory. A held item with the same name is
    /// replaced, keeping names unique.
    pub fn add_to_inventory(&mut self, item: Item) {
        match self.inventory.iter_mut().find(|i| i.name == item.name) {
            Some(existing) => *existing = item,
            None => self.inventory.push(item),
        }
    }

    /// Remove a held item by name, returning it. Removing an item that is
    /// not held is an error.
    pub fn remove_from_inventory(&mut self, name: &str) -> EngineResult<Item> {
        match self.inventory.iter().position(|i| i.name == name) {
            Some(index) => Ok(self.inventory.remove(index)),
            None => Err(EngineError::ItemNotFound(name.to_string())),
        }
    }

    /// Whether the player is carrying an item with this name.
    pub fn is_in_inventory(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i.name == name)
    }

    /// The held items, in the order they were acquired.
    pub fn inventory(&self) -> impl Iterator<Item = &Item> {
        self.inventory.iter()
    }

    // -----------------------------------------------------------------------
    // Scope and destruction
    // -----------------------------------------------------------------------

    /// Items visible to action resolution: the current location's items
    /// first, then the inventory, each in insertion order.
    pub fn items_in_scope(&self) -> Vec<&Item> {
        self.current_location()
            .items()
            .chain(self.inventory.iter())
            .collect()
    }

    /// Whether an item with this name exists in any container.
    pub fn item_exists(&self, name: &str) -> bool {
        self.is_in_inventory(name) || self.locations.iter().any(|l| l.has_item(name))
    }

    /// Remove the named item from whichever container holds it: inventory
    /// first, then the current location, then any other location. An item
    /// present nowhere is an error (callers degrade it to a message).
    pub fn destroy_item(&mut self, name: &str) -> EngineResult<Item> {
        if self.is_in_inventory(name) {
            return self.remove_from_inventory(name);
        }
        if self.current_location().has_item(name) {
            return self.current_location_mut().remove_item(name);
        }
        for location in &mut self.locations {
            if location.has_item(name) {
                return location.remove_item(name);
            }
        }
        Err(EngineError::ItemNotFound(name.to_string()))
    }
}
