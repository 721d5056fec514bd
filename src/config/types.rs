// menuboard configuration types
// Every section falls back to defaults so partial files stay valid

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::store::Course;

/// Upper bound applied to `display.notification_secs`
pub const MAX_NOTIFICATION_SECS: u64 = 3600;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Prefix shown before every price
    pub currency_symbol: String,

    // How long add/remove notifications stay on screen
    pub notification_secs: u64,

    // Course accent colors (RGB values 0-255)
    pub appetizers_color: [u8; 3],
    pub main_courses_color: [u8; 3],
    pub desserts_color: [u8; 3],
    pub beverages_color: [u8; 3],
}

impl DisplayConfig {
    /// Notification lifetime, capped at `MAX_NOTIFICATION_SECS`
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_secs.min(MAX_NOTIFICATION_SECS))
    }

    pub fn course_color(&self, course: Course) -> [u8; 3] {
        match course {
            Course::Appetizers => self.appetizers_color,
            Course::MainCourses => self.main_courses_color,
            Course::Desserts => self.desserts_color,
            Course::Beverages => self.beverages_color,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            notification_secs: 3,
            appetizers_color: [255, 107, 107],  // #FF6B6B
            main_courses_color: [78, 205, 196], // #4ECDC4
            desserts_color: [255, 160, 122],    // #FFA07A
            beverages_color: [155, 89, 182],    // #9B59B6
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormConfig {
    // Course preselected on the Create Dish form
    pub default_course: Course,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_course: Course::MainCourses,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    pub quit: String,
    pub next_tab: String,
    pub prev_tab: String,
    // Remove the selected dish
    pub remove: String,
    // Open details / add from catalog / activate
    pub select: String,
    // Close a view or cancel the form
    pub back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "Q".to_string(),
            next_tab: "Tab".to_string(),
            prev_tab: "BackTab".to_string(),
            remove: "D".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_ttl_is_capped() {
        let mut display = DisplayConfig::default();
        assert_eq!(display.notification_ttl(), Duration::from_secs(3));

        display.notification_secs = u64::MAX;
        assert_eq!(
            display.notification_ttl(),
            Duration::from_secs(MAX_NOTIFICATION_SECS)
        );
    }
}
