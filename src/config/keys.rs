// Key binding resolution: config strings -> crossterm key codes

use crossterm::event::KeyCode;
use thiserror::Error;
use tracing::warn;

use super::types::KeyBindings;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown key name '{0}'")]
pub struct KeyBindingError(pub String);

/// Parse a key name such as "Q", "Enter", "Esc", "Tab", "F5"
pub fn parse_key(name: &str) -> Result<KeyCode, KeyBindingError> {
    let trimmed = name.trim();

    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    let code = match trimmed.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" | "shift+tab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n) if (1..=12).contains(&n) => KeyCode::F(n),
            _ => return Err(KeyBindingError(name.to_string())),
        },
    };

    Ok(code)
}

/// Resolved key bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    pub quit: KeyCode,
    pub next_tab: KeyCode,
    pub prev_tab: KeyCode,
    pub remove: KeyCode,
    pub select: KeyCode,
    pub back: KeyCode,
}

impl Keymap {
    /// Resolve configured names, keeping the default for any name that does not parse
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        let defaults = KeyBindings::default();
        let resolve = |action: &str, configured: &str, fallback: &str| match parse_key(configured) {
            Ok(code) => code,
            Err(e) => {
                warn!(action, error = %e, "invalid key binding, using default '{}'", fallback);
                parse_key(fallback).unwrap_or(KeyCode::Null)
            }
        };

        Self {
            quit: resolve("quit", &bindings.quit, &defaults.quit),
            next_tab: resolve("next_tab", &bindings.next_tab, &defaults.next_tab),
            prev_tab: resolve("prev_tab", &bindings.prev_tab, &defaults.prev_tab),
            remove: resolve("remove", &bindings.remove, &defaults.remove),
            select: resolve("select", &bindings.select, &defaults.select),
            back: resolve("back", &bindings.back, &defaults.back),
        }
    }

    /// Compare a pressed key against a binding; letters match either case
    pub fn matches(binding: KeyCode, pressed: KeyCode) -> bool {
        match (binding, pressed) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        }
    }

    /// Whether any configured action is bound to `pressed`
    pub fn claims(&self, pressed: KeyCode) -> bool {
        [
            self.quit,
            self.next_tab,
            self.prev_tab,
            self.remove,
            self.select,
            self.back,
        ]
        .into_iter()
        .any(|binding| Self::matches(binding, pressed))
    }

    /// Short label for footer hints
    pub fn label(code: KeyCode) -> String {
        match code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Backspace => "Bksp".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_char_keys() {
        assert_eq!(parse_key("Q"), Ok(KeyCode::Char('q')));
        assert_eq!(parse_key("enter"), Ok(KeyCode::Enter));
        assert_eq!(parse_key(" Esc "), Ok(KeyCode::Esc));
        assert_eq!(parse_key("BackTab"), Ok(KeyCode::BackTab));
        assert_eq!(parse_key("Delete"), Ok(KeyCode::Delete));
        assert_eq!(parse_key("Space"), Ok(KeyCode::Char(' ')));
        assert_eq!(parse_key("F5"), Ok(KeyCode::F(5)));
        assert!(parse_key("F13").is_err());
        assert!(parse_key("Hyper").is_err());
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_invalid_binding_falls_back_to_default() {
        let bindings = KeyBindings {
            quit: "NotAKey".to_string(),
            remove: "Delete".to_string(),
            ..KeyBindings::default()
        };
        let keymap = Keymap::from_bindings(&bindings);
        assert_eq!(keymap.quit, KeyCode::Char('q'));
        assert_eq!(keymap.remove, KeyCode::Delete);
        assert_eq!(keymap.next_tab, KeyCode::Tab);
    }

    #[test]
    fn test_claims_reports_bound_keys() {
        let bindings = KeyBindings {
            remove: "J".to_string(),
            ..KeyBindings::default()
        };
        let keymap = Keymap::from_bindings(&bindings);
        assert!(keymap.claims(KeyCode::Char('j')));
        assert!(keymap.claims(KeyCode::Enter));
        assert!(!keymap.claims(KeyCode::Char('k')));
    }

    #[test]
    fn test_letter_bindings_ignore_case() {
        assert!(Keymap::matches(KeyCode::Char('q'), KeyCode::Char('Q')));
        assert!(Keymap::matches(KeyCode::Enter, KeyCode::Enter));
        assert!(!Keymap::matches(KeyCode::Char('q'), KeyCode::Char('d')));
        assert!(!Keymap::matches(KeyCode::Tab, KeyCode::BackTab));
    }
}
