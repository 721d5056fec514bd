// App module for menuboard
// Tab routing, selection state and key handling on top of the menu store

pub mod input;
pub mod state;

pub use input::{handle_key, poll_key, try_paste_from_clipboard};
pub use state::{App, FilterChoice, ManageFocus, Notification, PendingRemoval, QuickAction, Tab};
