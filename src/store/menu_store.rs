// The in-memory menu store
// Single owner of the dish collection; every mutation goes through add/remove

use tracing::debug;

use super::course::Course;
use super::item::{IdGenerator, ItemId, MenuItem, NewMenuItem};
use super::price::Price;

/// Change notification emitted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added { id: ItemId, name: String },
    Removed(MenuItem),
}

/// Count and average price for one course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSummary {
    pub course: Course,
    pub average: Price,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    ids: IdGenerator,
    events: Vec<StoreEvent>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dish under a freshly generated id.
    ///
    /// The store trusts its caller: no validation happens here.
    pub fn add_item(&mut self, candidate: NewMenuItem) -> ItemId {
        let id = self.ids.next_id();
        let item = MenuItem::from_new(id, candidate);
        debug!(%id, name = item.name(), course = %item.course(), price = %item.price(), "item added");

        self.events.push(StoreEvent::Added {
            id,
            name: item.name().to_string(),
        });
        self.items.push(item);
        id
    }

    /// Remove the dish with this id. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: ItemId) -> Option<MenuItem> {
        let Some(position) = self.items.iter().position(|item| item.id() == id) else {
            debug!(%id, "remove ignored, no such item");
            return None;
        };

        let removed = self.items.remove(position);
        debug!(%id, name = removed.name(), "item removed");
        self.events.push(StoreEvent::Removed(removed.clone()));
        Some(removed)
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Items of one course, in insertion order
    pub fn items_by_course(&self, course: Course) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.course() == course)
            .collect()
    }

    /// Mean price of a course; zero when the course is empty
    pub fn average_price_by_course(&self, course: Course) -> Price {
        Price::mean(
            self.items
                .iter()
                .filter(|item| item.course() == course)
                .map(MenuItem::price),
        )
    }

    /// Per-course summaries in canonical order, skipping empty courses
    pub fn all_average_prices(&self) -> Vec<CourseSummary> {
        Course::ALL
            .into_iter()
            .map(|course| CourseSummary {
                course,
                average: self.average_price_by_course(course),
                count: self.items.iter().filter(|i| i.course() == course).count(),
            })
            .filter(|summary| summary.count > 0)
            .collect()
    }

    /// Every item in insertion order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    /// Every item ordered by canonical course, then insertion order
    pub fn items_grouped_by_course(&self) -> Vec<&MenuItem> {
        Course::ALL
            .into_iter()
            .flat_map(|course| self.items_by_course(course))
            .collect()
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take all change notifications since the last drain
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }
}
