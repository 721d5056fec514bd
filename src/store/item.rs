// Menu item records and id generation

use std::fmt;

use super::course::Course;
use super::price::Price;

/// Opaque dish identifier, unique for the lifetime of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dish-{:04}", self.0)
    }
}

/// Monotonic id source. Ids are never handed out twice.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A dish that has not been added to the store yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: Price,
}

impl NewMenuItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: Course,
        price: Price,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course,
            price,
        }
    }
}

/// A dish on the menu. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    id: ItemId,
    name: String,
    description: String,
    course: Course,
    price: Price,
}

impl MenuItem {
    pub(super) fn from_new(id: ItemId, item: NewMenuItem) -> Self {
        Self {
            id,
            name: item.name,
            description: item.description,
            course: item.course,
            price: item.price,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn price(&self) -> Price {
        self.price
    }
}
