// Key handling: translates key presses into App operations

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::{App, ManageFocus, QuickAction, Tab};
use crate::catalog::CATALOG;
use crate::config::Keymap;
use crate::form::FormField;

/// Wait up to `timeout` for a key press
pub fn poll_key(timeout: Duration) -> Result<Option<KeyEvent>, io::Error> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }

    Ok(None)
}

/// Read text from the system clipboard, if one is reachable
pub fn try_paste_from_clipboard() -> Option<String> {
    arboard::Clipboard::new().ok()?.get_text().ok()
}

/// Apply one key press to the application state
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
        app.should_quit = true;
        return;
    }

    // Confirmation dialog captures everything
    if app.pending_removal.is_some() {
        handle_confirm_input(app, key.code);
        return;
    }

    if app.detail.is_some() {
        if Keymap::matches(app.keymap.back, key.code) || Keymap::matches(app.keymap.select, key.code)
        {
            app.close_details();
        }
        return;
    }

    // The form owns the keyboard so letters and digits can be typed
    if app.tab == Tab::Create {
        handle_form_input(app, key.code, ctrl);
        return;
    }

    let keymap = app.keymap.clone();
    if Keymap::matches(keymap.quit, key.code) {
        app.should_quit = true;
        return;
    }
    if Keymap::matches(keymap.next_tab, key.code) {
        app.switch_tab(app.tab.next());
        return;
    }
    if Keymap::matches(keymap.prev_tab, key.code) {
        app.switch_tab(app.tab.previous());
        return;
    }
    if let KeyCode::Char(c) = key.code {
        if let Some(tab) = Tab::from_digit(c) {
            app.switch_tab(tab);
            return;
        }
    }

    match app.tab {
        Tab::Home => handle_home_input(app, key.code),
        Tab::Manage => handle_manage_input(app, key.code),
        Tab::MyMenu => handle_menu_list_input(app, key.code),
        Tab::Filter => handle_filter_input(app, key.code),
        Tab::Create => {}
    }
}

// Vim-style letters only navigate when no configured binding uses them
fn is_nav_letter(keymap: &Keymap, code: KeyCode, letter: char) -> bool {
    matches!(code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&letter)) && !keymap.claims(code)
}

fn is_up(keymap: &Keymap, code: KeyCode) -> bool {
    code == KeyCode::Up || is_nav_letter(keymap, code, 'k')
}

fn is_down(keymap: &Keymap, code: KeyCode) -> bool {
    code == KeyCode::Down || is_nav_letter(keymap, code, 'j')
}

fn is_left(keymap: &Keymap, code: KeyCode) -> bool {
    code == KeyCode::Left || is_nav_letter(keymap, code, 'h')
}

fn is_right(keymap: &Keymap, code: KeyCode) -> bool {
    code == KeyCode::Right || is_nav_letter(keymap, code, 'l')
}

fn handle_confirm_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_removal(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_removal(),
        other if Keymap::matches(app.keymap.back, other) => app.cancel_removal(),
        _ => {}
    }
}

fn handle_form_input(app: &mut App, code: KeyCode, ctrl: bool) {
    if Keymap::matches(app.keymap.back, code) {
        app.go_back();
        return;
    }

    match code {
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_previous(),
        KeyCode::Left if app.form.focus == FormField::Course => app.form.previous_course(),
        KeyCode::Right if app.form.focus == FormField::Course => app.form.next_course(),
        KeyCode::Char(' ') if app.form.focus == FormField::Course => app.form.next_course(),
        KeyCode::Backspace => {
            app.form.backspace();
            app.form.error = None;
        }
        KeyCode::Char('v') | KeyCode::Char('V') if ctrl => {
            if let Some(text) = try_paste_from_clipboard() {
                app.form.paste(&text);
                app.form.error = None;
            }
        }
        KeyCode::Char(c) if !ctrl => {
            app.form.insert_char(c);
            app.form.error = None;
        }
        _ => {}
    }
}

fn handle_home_input(app: &mut App, code: KeyCode) {
    if is_up(&app.keymap, code) {
        app.move_home(false);
    } else if is_down(&app.keymap, code) {
        app.move_home(true);
    } else if Keymap::matches(app.keymap.select, code) {
        let action = QuickAction::ALL[app.home_selected % QuickAction::ALL.len()];
        app.switch_tab(action.target());
    }
}

fn handle_manage_input(app: &mut App, code: KeyCode) {
    if is_up(&app.keymap, code) {
        app.move_manage(false);
    } else if is_down(&app.keymap, code) {
        app.move_manage(true);
    } else if matches!(code, KeyCode::Left | KeyCode::Right) {
        app.toggle_manage_focus();
    } else if Keymap::matches(app.keymap.remove, code) {
        if app.manage_focus == ManageFocus::Added {
            if let Some(id) = app.selected_added_item() {
                app.request_removal(id);
            }
        }
    } else if Keymap::matches(app.keymap.select, code) {
        match app.manage_focus {
            ManageFocus::Catalog if app.catalog_selected < CATALOG.len() => {
                app.add_selected_catalog_dish()
            }
            ManageFocus::Added => {
                if let Some(id) = app.selected_added_item() {
                    app.open_details(id);
                }
            }
            _ => {}
        }
    }
}

fn handle_menu_list_input(app: &mut App, code: KeyCode) {
    if is_up(&app.keymap, code) {
        app.move_menu(false);
    } else if is_down(&app.keymap, code) {
        app.move_menu(true);
    } else if Keymap::matches(app.keymap.remove, code) {
        // No confirmation here, matching the quick delete on the full menu
        if let Some(id) = app.selected_menu_item() {
            app.remove_now(id);
        }
    } else if Keymap::matches(app.keymap.select, code) {
        if let Some(id) = app.selected_menu_item() {
            app.open_details(id);
        }
    }
}

fn handle_filter_input(app: &mut App, code: KeyCode) {
    if is_up(&app.keymap, code) {
        app.move_filter(false);
    } else if is_down(&app.keymap, code) {
        app.move_filter(true);
    } else if is_left(&app.keymap, code) {
        app.set_filter(app.filter.previous());
    } else if is_right(&app.keymap, code) {
        app.set_filter(app.filter.next());
    } else if Keymap::matches(app.keymap.select, code) {
        if let Some(id) = app.selected_filter_item() {
            app.open_details(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::FilterChoice;
    use crate::config::Config;
    use crate::store::{Course, MenuItem};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_number_keys_and_tab_switch_tabs() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tab, Tab::MyMenu);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Filter);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tab, Tab::MyMenu);
    }

    #[test]
    fn test_quit_key_outside_form() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_even_in_form() {
        let mut app = App::new(Config::default());
        app.switch_tab(Tab::Create);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_create_dish_through_form() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, Tab::Create);

        // Letters that are bindings elsewhere are plain text here
        type_text(&mut app, "Quiche");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Egg and bacon tart");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "9.5");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store().total_items(), 1);
        let item = app.store().items().next().unwrap();
        assert_eq!(item.name(), "Quiche");
        assert_eq!(item.course(), Course::Appetizers);
        assert_eq!(item.price().to_string(), "9.50");
        assert_eq!(app.tab, Tab::Filter);
        assert!(app.form.name.is_empty());
    }

    #[test]
    fn test_invalid_form_never_reaches_store() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('3'));
        type_text(&mut app, "Nameless price");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "desc");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "free");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store().total_items(), 0);
        assert_eq!(app.tab, Tab::Create);
        assert!(app.form.error.is_some());

        // Editing clears the message
        press(&mut app, KeyCode::Backspace);
        assert!(app.form.error.is_none());
    }

    #[test]
    fn test_esc_cancels_form_without_adding() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('3'));
        type_text(&mut app, "Half typed");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tab, Tab::Manage);
        assert_eq!(app.store().total_items(), 0);
    }

    #[test]
    fn test_manage_add_then_confirm_remove() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.store().contains_name(CATALOG[1].name));

        // Second Enter on the same dish is refused
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store().total_items(), 1);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.manage_focus, ManageFocus::Added);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.pending_removal.is_some());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store().total_items(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store().total_items(), 0);
    }

    #[test]
    fn test_menu_list_removes_without_confirmation() {
        let mut app = App::new(Config::default());
        app.switch_tab(Tab::Manage);
        app.add_selected_catalog_dish();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store().total_items(), 0);
        assert!(app.pending_removal.is_none());
    }

    #[test]
    fn test_filter_cycles_and_opens_details() {
        let mut app = App::new(Config::default());
        app.catalog_selected = 6;
        app.add_selected_catalog_dish();
        press(&mut app, KeyCode::Char('5'));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.filter, FilterChoice::Only(Course::Appetizers));
        assert_eq!(app.selected_filter_item(), None);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.filter, FilterChoice::Only(Course::Desserts));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.detail_item().map(MenuItem::name),
            Some(CATALOG[6].name)
        );

        // Keys other than back/select are swallowed by the details view
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.tab, Tab::Filter);
        press(&mut app, KeyCode::Esc);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_home_quick_action_navigates() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tab, Tab::MyMenu);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.home_selected, 1);
    }

    #[test]
    fn test_bound_letter_wins_over_vim_navigation() {
        let mut config = Config::default();
        config.keybindings.remove = "J".to_string();
        let mut app = App::new(config);
        app.switch_tab(Tab::Manage);
        app.add_selected_catalog_dish();
        app.catalog_selected = 1;
        app.add_selected_catalog_dish();

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.store().total_items(), 1);

        // Unbound vim letters still move the cursor
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.store().total_items(), 1);
    }
}
