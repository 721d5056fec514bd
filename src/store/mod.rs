// Menu store module
// Owns the dish collection and the per-course aggregates derived from it

pub mod course;
pub mod item;
pub mod menu_store;
pub mod price;

pub use course::{Course, UnknownCourse};
pub use item::{IdGenerator, ItemId, MenuItem, NewMenuItem};
pub use menu_store::{CourseSummary, MenuStore, StoreEvent};
pub use price::{Price, PriceError};
