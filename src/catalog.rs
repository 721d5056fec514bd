// Predefined dishes offered on the Manage tab

use crate::store::{Course, MenuStore, NewMenuItem, Price};

/// A ready-made dish that can be added with a single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogDish {
    pub name: &'static str,
    pub description: &'static str,
    pub course: Course,
    pub price: Price,
}

impl CatalogDish {
    const fn new(
        name: &'static str,
        description: &'static str,
        course: Course,
        cents: u64,
    ) -> Self {
        Self {
            name,
            description,
            course,
            price: Price::from_cents(cents),
        }
    }

    pub fn to_new_item(&self) -> NewMenuItem {
        NewMenuItem::new(self.name, self.description, self.course, self.price)
    }

    /// A catalog dish counts as added once any menu item carries its name
    pub fn is_added(&self, store: &MenuStore) -> bool {
        store.contains_name(self.name)
    }
}

pub static CATALOG: [CatalogDish; 12] = [
    CatalogDish::new(
        "Truffle Arancini",
        "Crispy risotto balls with black truffle",
        Course::Appetizers,
        1299,
    ),
    CatalogDish::new(
        "Lobster Bisque",
        "Creamy lobster soup with crème fraîche",
        Course::Appetizers,
        1499,
    ),
    CatalogDish::new(
        "Beef Carpaccio",
        "Thinly sliced beef with arugula and parmesan",
        Course::Appetizers,
        1699,
    ),
    CatalogDish::new(
        "Wagyu Beef Tenderloin",
        "Premium wagyu with red wine reduction",
        Course::MainCourses,
        4599,
    ),
    CatalogDish::new(
        "Lobster Thermidor",
        "Whole lobster in creamy brandy sauce",
        Course::MainCourses,
        3899,
    ),
    CatalogDish::new(
        "Duck à l'Orange",
        "Roasted duck with orange glaze",
        Course::MainCourses,
        3299,
    ),
    CatalogDish::new(
        "Chocolate Soufflé",
        "Warm chocolate soufflé with vanilla ice cream",
        Course::Desserts,
        1199,
    ),
    CatalogDish::new(
        "Crème Brûlée Trio",
        "Three flavors of classic crème brûlée",
        Course::Desserts,
        1099,
    ),
    CatalogDish::new(
        "Berry Pavlova",
        "Meringue with fresh berries and chantilly cream",
        Course::Desserts,
        999,
    ),
    CatalogDish::new(
        "Aged Scotch Flight",
        "Three premium aged scotch whiskies",
        Course::Beverages,
        2599,
    ),
    CatalogDish::new(
        "Wine Pairing Flight",
        "Curated wine selections by course",
        Course::Beverages,
        2299,
    ),
    CatalogDish::new(
        "Craft Cocktail Selection",
        "Signature cocktails by our mixologist",
        Course::Beverages,
        1499,
    ),
];

/// Add a catalog dish unless one with the same name is already on the menu.
/// Returns whether the store changed.
pub fn add_from_catalog(store: &mut MenuStore, dish: &CatalogDish) -> bool {
    if dish.is_added(store) {
        return false;
    }
    store.add_item(dish.to_new_item());
    true
}

/// Preload every catalog dish that is not on the menu yet
pub fn seed(store: &mut MenuStore) -> usize {
    CATALOG
        .iter()
        .filter(|dish| add_from_catalog(store, dish))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_dishes_per_course() {
        for course in Course::ALL {
            let count = CATALOG.iter().filter(|d| d.course == course).count();
            assert_eq!(count, 3, "{} should have three catalog dishes", course);
        }
    }

    #[test]
    fn test_catalog_dish_converts_to_new_item() {
        let item = CATALOG[0].to_new_item();
        assert_eq!(item.name, "Truffle Arancini");
        assert_eq!(item.course, Course::Appetizers);
        assert_eq!(item.price.to_string(), "12.99");
    }

    #[test]
    fn test_catalog_dish_cannot_be_added_twice() {
        let mut store = MenuStore::new();
        let dish = &CATALOG[3];

        assert!(add_from_catalog(&mut store, dish));
        assert!(dish.is_added(&store));
        assert!(!add_from_catalog(&mut store, dish));
        assert_eq!(store.total_items(), 1);
    }

    #[test]
    fn test_seed_fills_menu_once() {
        let mut store = MenuStore::new();
        assert_eq!(seed(&mut store), 12);
        assert_eq!(seed(&mut store), 0);
        assert_eq!(store.total_items(), 12);

        let summaries = store.all_average_prices();
        assert_eq!(summaries.len(), 4);
        // (12.99 + 14.99 + 16.99) / 3
        assert_eq!(summaries[0].average.to_string(), "14.99");
        // (45.99 + 38.99 + 32.99) / 3
        assert_eq!(summaries[1].average.to_string(), "39.32");
    }
}
