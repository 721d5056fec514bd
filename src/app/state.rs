// Application state: tab routing, per-tab selection, dialogs and notifications
// The store lives here and is only mutated through App's methods

use std::time::Instant;
use tracing::{debug, info};

use crate::catalog::{self, CATALOG};
use crate::config::{Config, Keymap};
use crate::form::DishForm;
use crate::store::{Course, ItemId, MenuItem, MenuStore, NewMenuItem, StoreEvent};
use crate::ui::OverlayMessage;

/// Top-level tabs in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Manage,
    Create,
    MyMenu,
    Filter,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Manage, Tab::Create, Tab::MyMenu, Tab::Filter];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Manage => "Manage",
            Tab::Create => "Create",
            Tab::MyMenu => "My Menu",
            Tab::Filter => "Filter",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Tab for a number key ('1' is Home)
    pub fn from_digit(c: char) -> Option<Tab> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Tab::ALL.get(i).copied())
    }
}

/// Shortcuts listed on the Home dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ManageMenu,
    CreateDish,
    ViewMenu,
    FilterMenu,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::ManageMenu,
        QuickAction::CreateDish,
        QuickAction::ViewMenu,
        QuickAction::FilterMenu,
    ];

    pub fn title(self) -> &'static str {
        match self {
            QuickAction::ManageMenu => "Manage Menu",
            QuickAction::CreateDish => "Create Custom Dish",
            QuickAction::ViewMenu => "View Full Menu",
            QuickAction::FilterMenu => "Filter Menu",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            QuickAction::ManageMenu => "Add or remove menu items",
            QuickAction::CreateDish => "Design your own menu item",
            QuickAction::ViewMenu => "See all your menu items",
            QuickAction::FilterMenu => "Browse by course type",
        }
    }

    pub fn target(self) -> Tab {
        match self {
            QuickAction::ManageMenu => Tab::Manage,
            QuickAction::CreateDish => Tab::Create,
            QuickAction::ViewMenu => Tab::MyMenu,
            QuickAction::FilterMenu => Tab::Filter,
        }
    }
}

/// Course filter on the Filter tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    All,
    Only(Course),
}

impl FilterChoice {
    pub const ALL: [FilterChoice; 5] = [
        FilterChoice::All,
        FilterChoice::Only(Course::Appetizers),
        FilterChoice::Only(Course::MainCourses),
        FilterChoice::Only(Course::Desserts),
        FilterChoice::Only(Course::Beverages),
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterChoice::All => "All",
            FilterChoice::Only(course) => course.label(),
        }
    }

    fn position(self) -> usize {
        FilterChoice::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FilterChoice {
        FilterChoice::ALL[(self.position() + 1) % FilterChoice::ALL.len()]
    }

    pub fn previous(self) -> FilterChoice {
        let len = FilterChoice::ALL.len();
        FilterChoice::ALL[(self.position() + len - 1) % len]
    }

    /// Matching items; "All" is grouped by course order
    pub fn items(self, store: &MenuStore) -> Vec<&MenuItem> {
        match self {
            FilterChoice::All => store.items_grouped_by_course(),
            FilterChoice::Only(course) => store.items_by_course(course),
        }
    }

    pub fn count(self, store: &MenuStore) -> usize {
        match self {
            FilterChoice::All => store.total_items(),
            FilterChoice::Only(course) => store.items_by_course(course).len(),
        }
    }

    /// Text shown when nothing matches
    pub fn empty_message(self) -> String {
        match self {
            FilterChoice::All => "No items have been added to the menu yet.".to_string(),
            FilterChoice::Only(course) => format!(
                "No {} have been added yet.",
                course.label().to_lowercase()
            ),
        }
    }
}

/// Which list has the cursor on the Manage tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageFocus {
    Added,
    Catalog,
}

/// Removal waiting for the user to confirm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub id: ItemId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: OverlayMessage,
    pub expires_at: Instant,
}

pub struct App {
    store: MenuStore,
    pub config: Config,
    pub keymap: Keymap,
    pub tab: Tab,
    /// Where Esc from the Create tab returns to
    pub previous_tab: Tab,
    pub home_selected: usize,
    pub manage_focus: ManageFocus,
    pub manage_selected: usize,
    pub catalog_selected: usize,
    pub menu_selected: usize,
    pub filter: FilterChoice,
    pub filter_selected: usize,
    pub form: DishForm,
    /// Item shown in the details view, if open
    pub detail: Option<ItemId>,
    pub pending_removal: Option<PendingRemoval>,
    pub notification: Option<Notification>,
    pub should_quit: bool,
}

fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        selected.min(len - 1)
    }
}

fn step(selected: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (selected + 1) % len
    } else if selected == 0 {
        len - 1
    } else {
        selected - 1
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_store(config, MenuStore::new())
    }

    pub fn with_store(config: Config, store: MenuStore) -> Self {
        let keymap = Keymap::from_bindings(&config.keybindings);
        let form = DishForm::new(config.form.default_course);
        let mut app = Self {
            store,
            config,
            keymap,
            tab: Tab::Home,
            previous_tab: Tab::Home,
            home_selected: 0,
            manage_focus: ManageFocus::Catalog,
            manage_selected: 0,
            catalog_selected: 0,
            menu_selected: 0,
            filter: FilterChoice::All,
            filter_selected: 0,
            form,
            detail: None,
            pending_removal: None,
            notification: None,
            should_quit: false,
        };
        // Seeded items should not greet the user with a notification
        app.store.drain_events();
        app
    }

    /// Read-only view of the menu
    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        debug!(from = self.tab.title(), to = tab.title(), "switch tab");
        self.previous_tab = self.tab;
        self.tab = tab;
        self.detail = None;
    }

    /// Leave the current tab for the one it was entered from
    pub fn go_back(&mut self) {
        let target = if self.previous_tab == self.tab {
            Tab::Home
        } else {
            self.previous_tab
        };
        self.switch_tab(target);
    }

    pub fn add_item(&mut self, item: NewMenuItem) -> ItemId {
        let id = self.store.add_item(item);
        self.after_store_change();
        id
    }

    /// Add the catalog dish under the cursor if it is not on the menu yet
    pub fn add_selected_catalog_dish(&mut self) {
        let Some(dish) = CATALOG.get(self.catalog_selected) else {
            return;
        };
        if catalog::add_from_catalog(&mut self.store, dish) {
            self.after_store_change();
        } else {
            debug!(name = dish.name, "catalog dish already on the menu");
        }
    }

    /// Ask for confirmation before removing
    pub fn request_removal(&mut self, id: ItemId) {
        if let Some(item) = self.store.get(id) {
            self.pending_removal = Some(PendingRemoval {
                id,
                name: item.name().to_string(),
            });
        }
    }

    pub fn confirm_removal(&mut self) {
        if let Some(pending) = self.pending_removal.take() {
            self.remove_now(pending.id);
        }
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    pub fn remove_now(&mut self, id: ItemId) {
        self.store.remove_item(id);
        self.after_store_change();
    }

    /// Validate the Create form; a valid dish is added and the tab closes
    pub fn submit_form(&mut self) -> bool {
        match self.form.submit() {
            Ok(item) => {
                self.add_item(item);
                self.go_back();
                true
            }
            Err(e) => {
                debug!(error = %e, "dish form rejected");
                false
            }
        }
    }

    pub fn open_details(&mut self, id: ItemId) {
        if self.store.get(id).is_some() {
            self.detail = Some(id);
        }
    }

    pub fn close_details(&mut self) {
        self.detail = None;
    }

    pub fn detail_item(&self) -> Option<&MenuItem> {
        self.detail.and_then(|id| self.store.get(id))
    }

    pub fn selected_added_item(&self) -> Option<ItemId> {
        self.store.items().nth(self.manage_selected).map(MenuItem::id)
    }

    pub fn selected_menu_item(&self) -> Option<ItemId> {
        self.store
            .items_grouped_by_course()
            .get(self.menu_selected)
            .map(|item| item.id())
    }

    pub fn selected_filter_item(&self) -> Option<ItemId> {
        self.filter
            .items(&self.store)
            .get(self.filter_selected)
            .map(|item| item.id())
    }

    pub fn move_home(&mut self, forward: bool) {
        self.home_selected = step(self.home_selected, QuickAction::ALL.len(), forward);
    }

    pub fn move_manage(&mut self, forward: bool) {
        match self.manage_focus {
            ManageFocus::Added => {
                self.manage_selected =
                    step(self.manage_selected, self.store.total_items(), forward)
            }
            ManageFocus::Catalog => {
                self.catalog_selected = step(self.catalog_selected, CATALOG.len(), forward)
            }
        }
    }

    pub fn toggle_manage_focus(&mut self) {
        self.manage_focus = match self.manage_focus {
            ManageFocus::Added => ManageFocus::Catalog,
            ManageFocus::Catalog => ManageFocus::Added,
        };
    }

    pub fn move_menu(&mut self, forward: bool) {
        self.menu_selected = step(self.menu_selected, self.store.total_items(), forward);
    }

    pub fn move_filter(&mut self, forward: bool) {
        let len = self.filter.count(&self.store);
        self.filter_selected = step(self.filter_selected, len, forward);
    }

    pub fn set_filter(&mut self, filter: FilterChoice) {
        self.filter = filter;
        self.filter_selected = 0;
    }

    pub fn notify(&mut self, message: OverlayMessage) {
        let now = Instant::now();
        let ttl = self.config.display.notification_ttl();
        self.notification = Some(Notification {
            message,
            expires_at: now.checked_add(ttl).unwrap_or(now),
        });
    }

    /// Drop the notification once it has expired
    pub fn tick(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.notification = None;
        }
    }

    /// Turn store events into notifications and keep every cursor in bounds
    fn after_store_change(&mut self) {
        for event in self.store.drain_events() {
            match event {
                StoreEvent::Added { id, name } => {
                    info!(%id, name = %name, total = self.store.total_items(), "dish added");
                    self.notify(
                        OverlayMessage::success(vec![format!(
                            "\"{}\" has been added to your menu!",
                            name
                        )])
                        .with_title("Success".to_string()),
                    );
                }
                StoreEvent::Removed(item) => {
                    info!(id = %item.id(), name = item.name(), total = self.store.total_items(), "dish removed");
                    self.notify(
                        OverlayMessage::info(vec![format!(
                            "\"{}\" has been removed from your menu.",
                            item.name()
                        )])
                        .with_title("Removed".to_string()),
                    );
                    if self.detail == Some(item.id()) {
                        self.detail = None;
                    }
                    if self
                        .pending_removal
                        .as_ref()
                        .is_some_and(|p| p.id == item.id())
                    {
                        self.pending_removal = None;
                    }
                }
            }
        }

        let total = self.store.total_items();
        self.manage_selected = clamp_selection(self.manage_selected, total);
        self.menu_selected = clamp_selection(self.menu_selected, total);
        self.filter_selected =
            clamp_selection(self.filter_selected, self.filter.count(&self.store));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Price;
    use std::time::Duration;

    fn dish(name: &str, course: Course, cents: u64) -> NewMenuItem {
        NewMenuItem::new(name, "Tasty", course, Price::from_cents(cents))
    }

    #[test]
    fn test_tab_cycling_and_digits() {
        assert_eq!(Tab::Filter.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Filter);
        assert_eq!(Tab::from_digit('1'), Some(Tab::Home));
        assert_eq!(Tab::from_digit('5'), Some(Tab::Filter));
        assert_eq!(Tab::from_digit('0'), None);
        assert_eq!(Tab::from_digit('6'), None);
    }

    #[test]
    fn test_go_back_returns_to_previous_tab() {
        let mut app = App::new(Config::default());
        app.switch_tab(Tab::Filter);
        app.switch_tab(Tab::Create);
        app.go_back();
        assert_eq!(app.tab, Tab::Filter);
    }

    #[test]
    fn test_removal_requires_confirmation() {
        let mut app = App::new(Config::default());
        let id = app.add_item(dish("Soup", Course::Appetizers, 1000));

        app.request_removal(id);
        assert_eq!(
            app.pending_removal.as_ref().map(|p| p.name.as_str()),
            Some("Soup")
        );
        app.cancel_removal();
        assert_eq!(app.store().total_items(), 1);

        app.request_removal(id);
        app.confirm_removal();
        assert_eq!(app.store().total_items(), 0);
        assert!(app.pending_removal.is_none());
    }

    #[test]
    fn test_selection_clamped_after_removal() {
        let mut app = App::new(Config::default());
        for i in 0..3 {
            app.add_item(dish(&format!("Dish {}", i), Course::Desserts, 500));
        }
        app.menu_selected = 2;
        app.manage_selected = 2;
        app.filter_selected = 2;

        let last = app.selected_menu_item().unwrap();
        app.remove_now(last);

        assert_eq!(app.menu_selected, 1);
        assert_eq!(app.manage_selected, 1);
        assert_eq!(app.filter_selected, 1);

        let ids: Vec<ItemId> = app.store().items().map(MenuItem::id).collect();
        for id in ids {
            app.remove_now(id);
        }
        assert_eq!(app.menu_selected, 0);
        assert_eq!(app.selected_menu_item(), None);
    }

    #[test]
    fn test_catalog_dish_added_once() {
        let mut app = App::new(Config::default());
        app.catalog_selected = 4;
        app.add_selected_catalog_dish();
        app.add_selected_catalog_dish();
        assert_eq!(app.store().total_items(), 1);
        assert!(app.store().contains_name(CATALOG[4].name));
    }

    #[test]
    fn test_notifications_follow_store_events_and_expire() {
        let mut app = App::new(Config::default());
        let id = app.add_item(dish("Soup", Course::Appetizers, 1000));
        let note = app.notification.clone().unwrap();
        assert!(note.message.lines[0].contains("\"Soup\" has been added"));

        app.remove_now(id);
        let note = app.notification.clone().unwrap();
        assert!(note.message.lines[0].contains("has been removed"));

        app.tick(Instant::now());
        assert!(app.notification.is_some());
        app.tick(Instant::now() + Duration::from_secs(60));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_huge_notification_duration_is_capped() {
        let config: Config =
            toml::from_str("[display]\nnotification_secs = 9223372036854775807").unwrap();
        let mut app = App::new(config);

        app.add_item(dish("Soup", Course::Appetizers, 1000));
        assert!(app.notification.is_some());

        app.tick(Instant::now() + Duration::from_secs(60));
        assert!(app.notification.is_some());
        app.tick(Instant::now() + Duration::from_secs(2 * 3600));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_removing_open_item_closes_details() {
        let mut app = App::new(Config::default());
        let id = app.add_item(dish("Tea", Course::Beverages, 250));
        app.open_details(id);
        assert_eq!(app.detail_item().map(MenuItem::name), Some("Tea"));

        app.remove_now(id);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_filter_items_and_empty_messages() {
        let mut app = App::new(Config::default());
        app.add_item(dish("Wine", Course::Beverages, 900));
        app.add_item(dish("Bread", Course::Appetizers, 300));

        let names: Vec<&str> = FilterChoice::All
            .items(app.store())
            .iter()
            .map(|i| i.name())
            .collect();
        assert_eq!(names, vec!["Bread", "Wine"]);
        assert_eq!(FilterChoice::Only(Course::Desserts).count(app.store()), 0);
        assert_eq!(
            FilterChoice::Only(Course::MainCourses).empty_message(),
            "No main courses have been added yet."
        );
        assert_eq!(FilterChoice::All.next(), FilterChoice::Only(Course::Appetizers));
        assert_eq!(FilterChoice::All.previous(), FilterChoice::Only(Course::Beverages));
    }

    #[test]
    fn test_seeded_store_starts_without_notification() {
        let mut store = MenuStore::new();
        catalog::seed(&mut store);
        let app = App::with_store(Config::default(), store);
        assert!(app.notification.is_none());
        assert_eq!(app.store().total_items(), 12);
    }
}
